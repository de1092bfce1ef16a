//! # readshelf
//!
//! Turns a plain-text reading-list manifest into a browsable static HTML
//! gallery with cached thumbnails. One run reads the manifest, produces or
//! reuses a thumbnail per entry, and writes a single self-contained page
//! with client-side filtering and sorting.
//!
//! # Pipeline
//!
//! ```text
//! readshelf.txt → parse → per entry: cache check → produce → optimize
//!                                    └───────────── accumulate ─────────┐
//!                                                  render → index.html ←┘
//! ```
//!
//! Entries are processed sequentially, in manifest order. A failed entry
//! is logged and dropped; the run always completes and reports how many
//! entries made it onto the page. The only fatal error is a missing
//! manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Blank-line-block manifest parser producing `Entry` records |
//! | [`cache`] | Content-addressed thumbnail cache, keyed by reference hash |
//! | [`thumbs`] | Thumbnail producers: video fetch, webpage screenshot, PDF render |
//! | [`render`] | Maud templates for the gallery page and its embedded client script |
//! | [`pipeline`] | Sequential orchestration of the stages above |
//! | [`config`] | Explicit paths object passed to every component |
//!
//! # Design Decisions
//!
//! ## The Filesystem Is the Cache
//!
//! A thumbnail's filename is the SHA-256 of its entry's reference, so the
//! cache needs no manifest, no TTL, and no invalidation logic: presence of
//! the file is the cache entry, and deleting it forces regeneration. Two
//! entries with the same reference share one thumbnail forever.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked templates, auto-escaped interpolation, and no runtime template
//! files to ship. The page's CSS and client script are embedded with
//! `include_str!`, so the binary emits one self-contained HTML file.
//!
//! ## Sequential by Design
//!
//! Producers drive a headless browser, the network, and pdfium — all
//! heavyweight, none worth overlapping for a personal reading list.
//! Processing one entry at a time keeps logs readable and failures
//! attributable.

pub mod cache;
pub mod config;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod thumbs;
