//! pila-extract Library
//!
//! This crate extracts candidate identifier numbers (contribution period
//! codes, document numbers) from PILA payroll-contribution PDFs:
//! - `extract`: the numeric token filter over document text
//! - `pdf`: text-layer access behind the [`pdf::TextLayerReader`] trait
//! - `source`: path/base64/URL resolution and directory scanning
//! - `extractor`: the orchestration layer composing the above

pub mod error;
pub mod extract;
pub mod extractor;
pub mod pdf;
pub mod source;

pub use error::{Error, Result};
pub use extract::{extract_numbers, extract_numbers_with, ExtractionResult, FilterOptions};
pub use extractor::{DocumentExtractor, DocumentReport, DocumentSource, ExtractorConfig};
pub use pdf::{join_pages, PdfiumReader, TextLayerReader};
pub use source::{scan_directory, PdfFileInfo};
