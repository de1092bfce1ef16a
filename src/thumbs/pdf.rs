//! Document thumbnails: download (when remote) and first-page rasterization.
//!
//! pdfium needs a filesystem path, so remote documents are downloaded into
//! the run's scratch directory first. Only page one is rendered — at 2×
//! scale, which gives plenty of resolution for a card-sized thumbnail
//! without rasterizing a whole poster.

use super::ThumbError;
use pdfium_render::prelude::*;
use std::path::Path;
use std::time::Duration;

/// Upscaling factor for the first-page render.
const RENDER_SCALE: f32 = 2.0;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0";

/// Download `url` to `dest`. Non-2xx responses are failures; there is no
/// body-content validation here — a broken download fails at render time
/// and the entry is skipped either way.
pub fn download(url: &str, dest: &Path) -> Result<(), ThumbError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(ThumbError::DownloadFailed {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes()?;
    std::fs::write(dest, &bytes)?;
    Ok(())
}

/// Rasterize page one of `pdf_path` and save it as a PNG at `out`.
///
/// The document handle is dropped before returning; pdfium keeps no state
/// between entries.
pub fn render_first_page(pdf_path: &Path, out: &Path) -> Result<(), ThumbError> {
    let pdfium = Pdfium::default();
    let document = pdfium.load_pdf_from_file(pdf_path, None)?;

    // An empty document surfaces here as a page-lookup error.
    let pages = document.pages();
    let page = pages.get(0)?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(RENDER_SCALE);
    let bitmap = page.render_with_config(&render_config)?;
    bitmap.as_image().save(out)?;

    Ok(())
}
