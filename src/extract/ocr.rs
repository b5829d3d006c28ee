//! OCR pass over rasterized page images.

use super::ExtractError;
use image::DynamicImage;
use rusty_tesseract::{Args, Image};

/// Recover text from one rendered page image.
///
/// The page is converted to grayscale before the Tesseract pass; the DPI hint matches the
/// resolution the page was rasterized at.
pub(super) fn image_to_text(
    page: &DynamicImage,
    language: &str,
    dpi: u32,
) -> Result<String, ExtractError> {
    let grayscale = DynamicImage::ImageLuma8(page.to_luma8());
    let tess_image = Image::from_dynamic_image(&grayscale)
        .map_err(|error| ExtractError::Ocr(format!("failed to prepare page image: {error:?}")))?;
    let args = Args {
        lang: language.to_string(),
        dpi: Some(dpi as i32),
        ..Args::default()
    };
    rusty_tesseract::image_to_string(&tess_image, &args)
        .map_err(|error| ExtractError::Ocr(format!("tesseract pass failed: {error:?}")))
}
