//! Document text extraction.
//!
//! An upload is buffered into memory and tagged with a [`DocumentFormat`] resolved once from
//! the file name suffix. Extraction then dispatches on the tag:
//!
//! - PDF: read the embedded text layer page by page; when the concatenated result is empty or
//!   whitespace-only, rasterize every page and run an OCR pass instead.
//! - DOCX: concatenate paragraph texts with newline separators in document order.
//! - Anything else: decode the bytes as UTF-8 plain text.
//!
//! Buffering the full byte stream up front is required: the PDF fallback reads the same bytes
//! a second time, and an upload stream cannot be rewound.

mod docx;
mod ocr;
mod pdf;

use thiserror::Error;

/// Closed set of supported document formats, resolved once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Portable Document Format, native text layer with OCR fallback.
    Pdf,
    /// Office Open XML word-processing document.
    Docx,
    /// UTF-8 plain text.
    Plain,
}

impl DocumentFormat {
    /// Resolve the format tag from the uploaded file name suffix.
    ///
    /// Anything that is neither `.pdf` nor `.docx` is treated as plain text.
    pub fn from_file_name(file_name: &str) -> Self {
        let lowered = file_name.to_lowercase();
        if lowered.ends_with(".pdf") {
            Self::Pdf
        } else if lowered.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Plain
        }
    }
}

/// An uploaded document: fully buffered bytes plus the resolved format tag.
#[derive(Debug, Clone)]
pub struct Document {
    bytes: Vec<u8>,
    format: DocumentFormat,
}

impl Document {
    /// Buffer an upload and resolve its format from the file name.
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            format: DocumentFormat::from_file_name(file_name),
            bytes,
        }
    }

    /// The format tag resolved at ingestion.
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Consume the document, yielding the buffered bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Errors raised while decoding an uploaded document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Plain-text bytes were not valid UTF-8.
    #[error("document is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// PDF structure could not be loaded or read.
    #[error("PDF extraction error: {0}")]
    Pdf(String),
    /// DOCX structure could not be parsed.
    #[error("DOCX extraction error: {0}")]
    Docx(String),
    /// OCR engine failed on a rasterized page.
    #[error("OCR error: {0}")]
    Ocr(String),
    /// Blocking extraction task panicked or was cancelled.
    #[error("Extraction task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Extract the full textual content of a document.
///
/// The document is consumed; extraction succeeding with no usable text is not an error and
/// yields an empty string (degenerate but valid downstream).
pub async fn extract_text(document: Document) -> Result<String, ExtractError> {
    let format = document.format();
    match format {
        DocumentFormat::Pdf => {
            let bytes = document.into_bytes();
            let native = pdf::native_text(bytes.clone()).await?;
            if needs_ocr_fallback(&native) {
                tracing::info!("PDF text layer empty or whitespace; falling back to OCR");
                pdf::ocr_text(bytes).await
            } else {
                Ok(native)
            }
        }
        DocumentFormat::Docx => docx::paragraph_text(document.into_bytes()).await,
        DocumentFormat::Plain => Ok(String::from_utf8(document.into_bytes())?),
    }
}

/// Whether a native PDF text-layer read was empty enough to warrant the OCR pass.
///
/// Native extraction is preferred for digitally authored documents; only an empty or
/// whitespace-only text layer triggers rasterization.
fn needs_ocr_fallback(native_text: &str) -> bool {
    native_text.trim().is_empty()
}
