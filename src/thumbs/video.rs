//! Video thumbnail fetch.
//!
//! YouTube publishes pre-rendered thumbnails per video id, so no browser or
//! decoder is involved: extract the id, try the qualities from highest to
//! lowest, and keep the first plausible response. YouTube answers missing
//! qualities with a tiny placeholder image instead of a 404, hence the
//! minimum-size check.

use super::ThumbError;
use std::path::Path;
use std::time::Duration;

/// Thumbnail qualities, highest resolution first.
const QUALITIES: [&str; 3] = ["maxresdefault", "hqdefault", "mqdefault"];

/// Placeholder images come in well under this; real thumbnails don't.
const MIN_PLAUSIBLE_BYTES: usize = 1000;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0";

/// Extract a YouTube video id from a watch URL.
///
/// Supports the `v=` query parameter (`youtube.com/watch?v=ID`) and the
/// short-domain path form (`youtu.be/ID`).
pub fn video_id(url: &str) -> Option<&str> {
    let query = match url.split_once('?') {
        Some((_, query)) => query,
        None => url,
    };
    for part in query.split('&') {
        if let Some(id) = part.strip_prefix("v=") {
            return Some(id);
        }
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        return Some(rest.split('?').next().unwrap_or(rest));
    }
    None
}

/// Fetch the best available thumbnail for a video URL and write the raw
/// bytes to `out`. No re-encode at this stage; the post-processor handles
/// recompression.
pub fn fetch_thumbnail(url: &str, out: &Path) -> Result<(), ThumbError> {
    let id = video_id(url).ok_or_else(|| ThumbError::NoVideoId(url.to_string()))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    for quality in QUALITIES {
        let thumb_url = format!("https://i.ytimg.com/vi/{id}/{quality}.jpg");
        let Ok(response) = client.get(&thumb_url).send() else {
            continue;
        };
        if !response.status().is_success() {
            continue;
        }
        let Ok(bytes) = response.bytes() else {
            continue;
        };
        if bytes.len() > MIN_PLAUSIBLE_BYTES {
            std::fs::write(out, &bytes)?;
            return Ok(());
        }
    }

    Err(ThumbError::NoThumbnail(url.to_string()))
}
