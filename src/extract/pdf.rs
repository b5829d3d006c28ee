//! PDF text-layer extraction and page rasterization via pdfium.
//!
//! pdfium is not async-safe, so each extraction binds the library and walks the document
//! inside `spawn_blocking`. The binding prefers an explicitly configured library directory
//! (`PDFIUM_LIB_DIR`) and falls back to the system library.

use super::{ExtractError, ocr};
use crate::config::get_config;
use pdfium_render::prelude::*;

/// Concatenate the embedded text layer of every page, in page order.
pub(super) async fn native_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || {
        let pdfium = bind_pdfium()?;
        let document = load_document(&pdfium, &bytes)?;
        let mut text = String::new();
        for page in document.pages().iter() {
            let page_text = page
                .text()
                .map_err(|error| ExtractError::Pdf(format!("failed to read page text: {error:?}")))?;
            text.push_str(&page_text.all());
        }
        Ok(text)
    })
    .await?
}

/// Rasterize every page at the configured resolution and run an OCR pass per page.
///
/// Per-page OCR text is joined with newline separators, in page order.
pub(super) async fn ocr_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    let config = get_config();
    let dpi = config.ocr_dpi;
    let language = config.ocr_language.clone();
    tokio::task::spawn_blocking(move || {
        let pdfium = bind_pdfium()?;
        let document = load_document(&pdfium, &bytes)?;
        // Page geometry is in points (1/72 inch); scaling by dpi/72 renders at the
        // requested resolution.
        let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / 72.0);
        let mut pages = Vec::new();
        for page in document.pages().iter() {
            let bitmap = page
                .render_with_config(&render_config)
                .map_err(|error| ExtractError::Pdf(format!("failed to rasterize page: {error:?}")))?;
            pages.push(ocr::image_to_text(&bitmap.as_image(), &language, dpi)?);
        }
        tracing::debug!(pages = pages.len(), dpi, "OCR pass complete");
        Ok(pages.join("\n"))
    })
    .await?
}

fn load_document<'a>(pdfium: &'a Pdfium, bytes: &'a [u8]) -> Result<PdfDocument<'a>, ExtractError> {
    pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|error| ExtractError::Pdf(format!("failed to load document: {error:?}")))
}

fn bind_pdfium() -> Result<Pdfium, ExtractError> {
    if let Some(dir) = &get_config().pdfium_lib_dir {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            .map_err(|error| {
                ExtractError::Pdf(format!("failed to bind pdfium in {dir}: {error:?}"))
            })?;
        return Ok(Pdfium::new(bindings));
    }
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|error| ExtractError::Pdf(format!("failed to bind system pdfium: {error:?}")))
}
