//! PDF text-layer access via PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;

/// A component able to produce the text layer of a PDF, one string per page.
///
/// The extraction pipeline only ever sees this trait, so it can run against
/// a stub in tests without any PDF engine present.
pub trait TextLayerReader {
    /// Return the text-layer content of every page, in page order. Each
    /// page's text items are joined by single spaces; a page without a
    /// readable text layer yields an empty string.
    fn page_texts(&self, data: &[u8], password: Option<&str>) -> Result<Vec<String>>;
}

/// Join per-page text into the single document string the filter consumes.
/// Pages with a blank text layer are skipped.
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|p| p.as_str())
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::PasswordRequired
        }
        _ => Error::Pdfium {
            reason: format!("{}", err),
        },
    }
}

/// Production text-layer reader backed by PDFium.
#[derive(Debug, Default)]
pub struct PdfiumReader;

impl PdfiumReader {
    pub fn new() -> Self {
        Self
    }

    /// One page's text items joined by single spaces. A page whose text
    /// object cannot be obtained is treated as blank, not as an error.
    fn page_text(page: &PdfPage) -> String {
        let text_obj = match page.text() {
            Ok(t) => t,
            Err(_) => return String::new(),
        };

        let mut items: Vec<String> = Vec::new();

        for segment in text_obj.segments().iter() {
            let mut item = String::new();
            if let Ok(chars) = segment.chars() {
                for char_result in chars.iter() {
                    if let Some(c) = char_result.unicode_char() {
                        item.push(c);
                    }
                }
            }
            if !item.is_empty() {
                items.push(item);
            }
        }

        items.join(" ")
    }
}

impl TextLayerReader for PdfiumReader {
    fn page_texts(&self, data: &[u8], password: Option<&str>) -> Result<Vec<String>> {
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::InvalidPdf {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = create_pdfium()?;

        let document = pdfium
            .load_pdf_from_byte_slice(data, password)
            .map_err(map_pdfium_error)?;

        let pages = document.pages();
        let mut texts = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            texts.push(Self::page_text(&page));
        }

        Ok(texts)
    }
}
