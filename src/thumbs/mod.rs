//! Thumbnail producers.
//!
//! Four independent strategies, one per entry shape, each writing a single
//! raster image at the entry's cache path or failing with a [`ThumbError`]:
//!
//! | Producer | Selected when | Module |
//! |----------|--------------|--------|
//! | Video thumbnail fetch | `kind == video` | [`video`] |
//! | Webpage screenshot | `kind == web` | [`web`] |
//! | Remote PDF render | `source == web`, other kinds | [`pdf`] |
//! | Local PDF render | `source == local`, other kinds | [`pdf`] |
//!
//! The pipeline catches every producer failure at the entry level: the
//! cause is printed, the entry is dropped from the output set, and the run
//! continues. Producers only write the cache file on success, so a failed
//! entry is retried on the next run.

pub mod optimize;
pub mod pdf;
pub mod video;
pub mod web;

use crate::manifest::{Kind, Source};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot extract video id from {0}")]
    NoVideoId(String),
    #[error("could not fetch thumbnail for {0}")]
    NoThumbnail(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("download failed: {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },
    #[error("local file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("PDF error: {0}")]
    Pdf(#[from] pdfium_render::prelude::PdfiumError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("browser error: {0}")]
    Browser(anyhow::Error),
}

// headless_chrome reports through anyhow, which doesn't implement
// std::error::Error itself, so thiserror's #[from] can't derive this one.
impl From<anyhow::Error> for ThumbError {
    fn from(err: anyhow::Error) -> Self {
        ThumbError::Browser(err)
    }
}

/// Which strategy produces the thumbnail for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Producer {
    Video,
    Screenshot,
    RemoteDocument,
    LocalDocument,
}

impl Producer {
    /// Dispatch on the entry's kind and source. Video and web kinds take
    /// precedence; everything else is a document render, remote or local.
    pub fn select(kind: Kind, source: Source) -> Producer {
        match (kind, source) {
            (Kind::Video, _) => Producer::Video,
            (Kind::Web, _) => Producer::Screenshot,
            (_, Source::Web) => Producer::RemoteDocument,
            (_, Source::Local) => Producer::LocalDocument,
        }
    }
}
