//! The build pipeline: parse → cache check → produce → optimize → render.
//!
//! Entries are processed one at a time, in manifest order, fully
//! synchronously — no two thumbnail productions ever overlap. Every
//! per-entry failure is caught here: the cause is printed, the entry is
//! dropped from the output set, and the run continues. The only fatal
//! condition is a missing manifest file.
//!
//! Downloads land in a [`TempDir`] scratch directory that is removed when
//! the run ends, normally or by panic. The output HTML and the thumbnail
//! cache directory are the only persistent artifacts.

use crate::cache::{RunStats, ThumbCache};
use crate::config::Config;
use crate::manifest::{self, Entry};
use crate::render::{self, Indexes, ShelfItem};
use crate::thumbs::{Producer, ThumbError, optimize, pdf, video, web};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file not found: {0}")]
    ManifestNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a run did, reported by the CLI.
#[derive(Debug)]
pub struct RunSummary {
    /// Entries that made it into the page.
    pub rendered: usize,
    /// Valid entries parsed from the manifest.
    pub parsed: usize,
    pub stats: RunStats,
}

/// Run the whole build for one configuration.
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    if !config.manifest_path.is_file() {
        return Err(PipelineError::ManifestNotFound(config.manifest_path.clone()));
    }
    let raw = fs::read_to_string(&config.manifest_path)?;

    let parsed = manifest::parse(&raw);
    for rejection in &parsed.rejected {
        println!("  skip ({}): {}", rejection.reason, rejection.title);
    }
    println!(
        "Found {} entries in {}\n",
        parsed.entries.len(),
        config.manifest_path.display()
    );

    let cache = ThumbCache::new(&config.thumb_dir);
    cache.ensure_dir()?;
    // Removed on drop, whether the run finishes or panics.
    let scratch = TempDir::new()?;

    let mut stats = RunStats::default();
    let mut items: Vec<ShelfItem> = Vec::new();
    let mut indexes = Indexes::default();
    let total = parsed.entries.len();

    for (i, entry) in parsed.entries.iter().enumerate() {
        let label = format!("[{}/{}]", i + 1, total);
        let thumb_path = cache.path(&entry.reference);

        if cache.contains(&entry.reference) {
            println!("{label} cached:      {}", entry.title);
            stats.hit();
        } else {
            let result = produce(entry, &thumb_path, scratch.path(), config, &label, i)
                .and_then(|()| {
                    println!("       optimizing…");
                    optimize::quantize_in_place(&thumb_path)
                });
            if let Err(e) = result {
                println!("       ERROR: {e} — skipping");
                // Never leave a partial thumbnail behind; the next run
                // should retry this entry from scratch.
                let _ = fs::remove_file(&thumb_path);
                stats.skip();
                continue;
            }
            stats.produce();
        }

        let item = ShelfItem {
            title: entry.title.clone(),
            kind: entry.kind,
            tags: entry.tags.clone(),
            read: entry.read,
            thumb_src: config.thumb_href(&thumb_path),
            href: entry.reference.clone(),
        };
        indexes.observe(&item);
        items.push(item);
    }

    indexes.finish();

    let html = render::render_page(&items, &indexes);
    fs::write(&config.output_path, html.into_string())?;

    Ok(RunSummary {
        rendered: items.len(),
        parsed: total,
        stats,
    })
}

/// Dispatch one entry to its producer. Only called on a cache miss; on
/// success the thumbnail exists at `thumb_path`.
fn produce(
    entry: &Entry,
    thumb_path: &Path,
    scratch: &Path,
    config: &Config,
    label: &str,
    index: usize,
) -> Result<(), ThumbError> {
    match Producer::select(entry.kind, entry.source) {
        Producer::Video => {
            println!("{label} video thumb: {}", entry.title);
            video::fetch_thumbnail(&entry.reference, thumb_path)
        }
        Producer::Screenshot => {
            println!("{label} screenshotting webpage: {}", entry.title);
            web::screenshot(&entry.reference, thumb_path, web::LoadTimeout::Unbounded)
        }
        Producer::RemoteDocument => {
            println!("{label} downloading: {}", entry.title);
            let pdf_path = scratch.join(format!("doc_{index}.pdf"));
            pdf::download(&entry.reference, &pdf_path)?;
            println!("       rendering…");
            pdf::render_first_page(&pdf_path, thumb_path)
        }
        Producer::LocalDocument => {
            let pdf_path = config.base_dir().join(&entry.reference);
            if !pdf_path.is_file() {
                return Err(ThumbError::FileNotFound(pdf_path));
            }
            println!("{label} local:       {}", entry.title);
            println!("       rendering…");
            pdf::render_first_page(&pdf_path, thumb_path)
        }
    }
}
