//! Webpage screenshot via headless Chrome.
//!
//! Navigates to the URL at a fixed viewport and captures the top-left
//! viewport-sized clip as PNG. Page load waits are governed by an explicit
//! [`LoadTimeout`] policy; for this producer the policy is unbounded, so a
//! slow third-party page eventually captures instead of truncating.

use super::ThumbError;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use std::path::Path;
use std::time::Duration;

/// Capture viewport, also the clip size of the saved thumbnail.
const VIEWPORT: (u32, u32) = (1280, 900);

/// How long to wait for a page to finish loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTimeout {
    /// Wait forever. The policy is explicit so a future bounded variant
    /// doesn't silently change the capture contract.
    Unbounded,
}

impl LoadTimeout {
    fn as_duration(self) -> Duration {
        match self {
            // Compared against Instant::elapsed, never added to an Instant,
            // so MAX is safe.
            LoadTimeout::Unbounded => Duration::MAX,
        }
    }
}

/// Screenshot `url` into `out` as a PNG of the top-left viewport clip.
pub fn screenshot(url: &str, out: &Path, timeout: LoadTimeout) -> Result<(), ThumbError> {
    let browser = Browser::new(LaunchOptions {
        window_size: Some(VIEWPORT),
        ..Default::default()
    })?;

    let tab = browser.new_tab()?;
    tab.set_default_timeout(timeout.as_duration());
    tab.navigate_to(url)?.wait_until_navigated()?;

    let png = tab.capture_screenshot(
        Page::CaptureScreenshotFormatOption::Png,
        None,
        Some(Page::Viewport {
            x: 0.0,
            y: 0.0,
            width: VIEWPORT.0 as f64,
            height: VIEWPORT.1 as f64,
            scale: 1.0,
        }),
        true,
    )?;

    std::fs::write(out, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_policy_maps_to_max_duration() {
        assert_eq!(LoadTimeout::Unbounded.as_duration(), Duration::MAX);
    }
}
