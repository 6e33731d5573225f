//! Extraction orchestration
//!
//! Composes source resolution, text-layer reading, and the numeric token
//! filter. This layer owns the contract the surrounding UI relies on: an
//! extraction call never fails, it reports failure inside the result.

use crate::error::Result;
use crate::extract::{extract_numbers_with, ExtractionResult, FilterOptions};
use crate::pdf::{join_pages, PdfiumReader, TextLayerReader};
use crate::source::{resolve_base64, resolve_path, resolve_url, ResolvedDocument};
use serde::Serialize;

/// Where a document comes from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A PDF file on disk
    Path { path: String },
    /// A base64-encoded PDF payload, as carried by document uploads
    Base64 { base64: String },
    /// A remote PDF fetched over http(s)
    Url { url: String },
}

impl DocumentSource {
    /// Display name used in reports and logs.
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::Path { path } => path.clone(),
            DocumentSource::Base64 { .. } => "<base64>".to_string(),
            DocumentSource::Url { url } => url.clone(),
        }
    }
}

/// Resource and filter configuration for a [`DocumentExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Token filter thresholds and policies
    pub filter: FilterOptions,
    /// Maximum download size in bytes for URL sources (default: 100MB)
    pub max_download_bytes: u64,
    /// Password for protected PDFs
    pub password: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            filter: FilterOptions::default(),
            max_download_bytes: 100 * 1024 * 1024, // 100MB
            password: None,
        }
    }
}

/// Per-document extraction report.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Display name of the document source
    pub source: String,
    pub success: bool,
    /// Space-joined surviving tokens (empty on failure)
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    fn from_result(source: String, result: ExtractionResult) -> Self {
        Self {
            source,
            success: result.success,
            text: result.text,
            error: result.error,
        }
    }
}

/// Number extraction over resolvable document sources.
///
/// Generic over the text-layer reader so the whole flow can be exercised in
/// tests without a PDF engine present.
pub struct DocumentExtractor<R: TextLayerReader = PdfiumReader> {
    reader: R,
    config: ExtractorConfig,
}

impl DocumentExtractor<PdfiumReader> {
    /// Extractor backed by the production PDFium reader.
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_reader(PdfiumReader::new(), config)
    }
}

impl<R: TextLayerReader> DocumentExtractor<R> {
    pub fn with_reader(reader: R, config: ExtractorConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract candidate identifier numbers from raw PDF bytes.
    ///
    /// Reader failures do not escape: they are logged and reported as an
    /// unsuccessful result carrying the user-facing message.
    pub fn extract_bytes(&self, data: &[u8]) -> ExtractionResult {
        match self.reader.page_texts(data, self.config.password.as_deref()) {
            Ok(pages) => extract_numbers_with(&join_pages(&pages), &self.config.filter),
            Err(e) => {
                tracing::warn!(error = %e, "text layer extraction failed");
                ExtractionResult::failed(e.user_message())
            }
        }
    }

    /// Resolve a document source and extract from it.
    pub fn extract_source(&self, source: &DocumentSource) -> DocumentReport {
        let resolved = match self.resolve(source) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(
                    source = %source.display_name(),
                    error = %e,
                    "source resolution failed"
                );
                return DocumentReport::from_result(
                    source.display_name(),
                    ExtractionResult::failed(e.user_message()),
                );
            }
        };

        let result = self.extract_bytes(&resolved.data);
        DocumentReport::from_result(resolved.source_name, result)
    }

    fn resolve(&self, source: &DocumentSource) -> Result<ResolvedDocument> {
        match source {
            DocumentSource::Path { path } => resolve_path(path),
            DocumentSource::Base64 { base64 } => resolve_base64(base64),
            DocumentSource::Url { url } => resolve_url(url, self.config.max_download_bytes),
        }
    }
}
