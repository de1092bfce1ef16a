//! Content-addressed thumbnail cache.
//!
//! Thumbnail production is the expensive part of a build — a single entry
//! can mean a headless-browser page load or a multi-megabyte PDF download.
//! The cache lets the pipeline skip production entirely when a thumbnail
//! for the same reference already exists on disk.
//!
//! # Design
//!
//! The cache is keyed purely by reference text: the SHA-256 of the
//! reference string, hex-encoded, is the thumbnail's filename stem. The
//! filesystem is the whole cache — presence of the file *is* the cache
//! entry. There is no invalidation, no TTL, and no content versioning;
//! refreshing an entry's thumbnail means deleting its cached file.
//!
//! Identical references therefore always map to the identical path, across
//! entries and across runs. Failed productions never write the cache file,
//! so a later run retries automatically.

use sha2::{Digest, Sha256};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Extension for every cached thumbnail. Video thumbnails store the fetched
/// JPEG bytes under this extension too; browsers sniff the content type.
const THUMB_EXT: &str = "png";

/// SHA-256 of a reference string, as a lowercase hex filename stem.
pub fn cache_key(reference: &str) -> String {
    format!("{:x}", Sha256::digest(reference.as_bytes()))
}

/// The thumbnail cache directory.
#[derive(Debug, Clone)]
pub struct ThumbCache {
    dir: PathBuf,
}

impl ThumbCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the cache directory if it doesn't exist yet.
    pub fn ensure_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// Deterministic on-disk path for a reference's thumbnail.
    pub fn path(&self, reference: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", cache_key(reference), THUMB_EXT))
    }

    /// Whether a thumbnail for this reference is already cached.
    pub fn contains(&self, reference: &str) -> bool {
        self.path(reference).is_file()
    }
}

/// Per-run cache performance, shown in the build summary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub hits: u32,
    pub produced: u32,
    pub skipped: u32,
}

impl RunStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn produce(&mut self) {
        self.produced += 1;
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn total(&self) -> u32 {
        self.hits + self.produced + self.skipped
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits > 0 || self.skipped > 0 {
            if self.skipped > 0 {
                write!(
                    f,
                    "{} cached, {} produced, {} skipped ({} total)",
                    self.hits,
                    self.produced,
                    self.skipped,
                    self.total()
                )
            } else {
                write!(
                    f,
                    "{} cached, {} produced ({} total)",
                    self.hits,
                    self.produced,
                    self.total()
                )
            }
        } else {
            write!(f, "{} produced", self.produced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cache_key_is_deterministic() {
        let k1 = cache_key("https://arxiv.org/pdf/1706.03762");
        let k2 = cache_key("https://arxiv.org/pdf/1706.03762");
        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 64); // SHA-256 hex is 64 chars
        assert!(k1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn cache_key_varies_with_reference() {
        assert_ne!(cache_key("https://a.example"), cache_key("https://b.example"));
    }

    #[test]
    fn identical_references_share_a_path() {
        let cache = ThumbCache::new("thumbnails");
        assert_eq!(
            cache.path("https://a.example/doc.pdf"),
            cache.path("https://a.example/doc.pdf")
        );
    }

    #[test]
    fn path_is_key_plus_png_under_dir() {
        let cache = ThumbCache::new("thumbs");
        let path = cache.path("ref");
        assert_eq!(path.parent().unwrap(), Path::new("thumbs"));
        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(
            path.file_stem().unwrap().to_str().unwrap(),
            cache_key("ref")
        );
    }

    #[test]
    fn contains_reflects_file_presence() {
        let tmp = TempDir::new().unwrap();
        let cache = ThumbCache::new(tmp.path());
        assert!(!cache.contains("https://a.example"));

        fs::write(cache.path("https://a.example"), b"png data").unwrap();
        assert!(cache.contains("https://a.example"));
        assert!(!cache.contains("https://b.example"));
    }

    #[test]
    fn ensure_dir_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let cache = ThumbCache::new(tmp.path().join("nested/thumbs"));
        cache.ensure_dir().unwrap();
        assert!(cache.dir().is_dir());
        // Idempotent
        cache.ensure_dir().unwrap();
    }

    #[test]
    fn run_stats_display_with_hits() {
        let stats = RunStats {
            hits: 5,
            produced: 2,
            skipped: 0,
        };
        assert_eq!(format!("{}", stats), "5 cached, 2 produced (7 total)");
    }

    #[test]
    fn run_stats_display_with_skips() {
        let stats = RunStats {
            hits: 3,
            produced: 2,
            skipped: 1,
        };
        assert_eq!(format!("{}", stats), "3 cached, 2 produced, 1 skipped (6 total)");
    }

    #[test]
    fn run_stats_display_cold_run() {
        let stats = RunStats {
            hits: 0,
            produced: 3,
            skipped: 0,
        };
        assert_eq!(format!("{}", stats), "3 produced");
    }
}
