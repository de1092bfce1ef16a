//! Thumbnail post-processing: palette quantization in place.
//!
//! Freshly produced thumbnails are full-color PNGs (or raw fetched JPEGs)
//! far larger than a card-sized display warrants. Quantizing to a 256-color
//! palette with Floyd–Steinberg dithering bounds the file size while
//! keeping thumbnails perceptually clean at grid scale. Cache hits are
//! never re-processed; this runs exactly once per produced file.

use super::ThumbError;
use color_quant::NeuQuant;
use std::path::Path;

/// Palette size after quantization.
const PALETTE_COLORS: usize = 256;

/// NeuQuant sampling factor: 1 is slowest/highest quality, 30 fastest.
/// Thumbnails are small, so lean toward quality.
const SAMPLE_FACTOR: i32 = 10;

/// Quantize the image at `path` and re-save it over itself as PNG.
///
/// Decoding guesses the format from content, not the extension: video
/// thumbnails arrive as raw JPEG bytes under the cache's `.png` name.
pub fn quantize_in_place(path: &Path) -> Result<(), ThumbError> {
    let mut img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    let palette = NeuQuant::new(SAMPLE_FACTOR, PALETTE_COLORS, img.as_raw());
    image::imageops::dither(&mut img, &palette);

    img.save(path)?;
    Ok(())
}
