//! Build configuration: the three paths every component needs.
//!
//! Constructed once in `main` from CLI arguments and passed explicitly —
//! there is no ambient lookup of a "script directory" or other process-wide
//! state.

use std::path::{Path, PathBuf};

/// Paths for one build run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The reading-list manifest to parse.
    pub manifest_path: PathBuf,
    /// The HTML file to write, overwritten each run.
    pub output_path: PathBuf,
    /// The thumbnail cache directory, created if absent.
    pub thumb_dir: PathBuf,
}

impl Config {
    pub fn new(manifest_path: PathBuf, output_path: PathBuf, thumb_dir: PathBuf) -> Self {
        Self {
            manifest_path,
            output_path,
            thumb_dir,
        }
    }

    /// Directory local references are resolved against: the manifest's own
    /// directory, so a manifest can ship next to its PDFs.
    pub fn base_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new(""))
    }

    /// `src` attribute for a thumbnail, relative to the output HTML's
    /// directory when possible so the generated page is relocatable.
    pub fn thumb_href(&self, thumb_path: &Path) -> String {
        let output_dir = self.output_path.parent().unwrap_or(Path::new(""));
        let rel = thumb_path.strip_prefix(output_dir).unwrap_or(thumb_path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(manifest: &str, output: &str, thumbs: &str) -> Config {
        Config::new(manifest.into(), output.into(), thumbs.into())
    }

    #[test]
    fn base_dir_is_manifest_parent() {
        let c = config("lists/readshelf.txt", "index.html", "thumbnails");
        assert_eq!(c.base_dir(), Path::new("lists"));
    }

    #[test]
    fn base_dir_of_bare_filename_is_empty() {
        let c = config("readshelf.txt", "index.html", "thumbnails");
        assert_eq!(c.base_dir(), Path::new(""));
    }

    #[test]
    fn thumb_href_relative_to_output_dir() {
        let c = config("readshelf.txt", "site/index.html", "site/thumbnails");
        let href = c.thumb_href(Path::new("site/thumbnails/abc.png"));
        assert_eq!(href, "thumbnails/abc.png");
    }

    #[test]
    fn thumb_href_falls_back_to_full_path() {
        // Thumb dir outside the output dir: keep the path as given.
        let c = config("readshelf.txt", "site/index.html", "/var/thumbs");
        let href = c.thumb_href(Path::new("/var/thumbs/abc.png"));
        assert_eq!(href, "/var/thumbs/abc.png");
    }

    #[test]
    fn thumb_href_with_output_beside_thumbs() {
        let c = config("readshelf.txt", "index.html", "thumbnails");
        let href = c.thumb_href(Path::new("thumbnails/abc.png"));
        assert_eq!(href, "thumbnails/abc.png");
    }
}
