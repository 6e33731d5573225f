//! Document resolution
//!
//! Turns the three supported input channels (filesystem path, base64 upload
//! payload, http(s) URL) into raw PDF bytes plus a display name.

use crate::error::{Error, Result};
use base64::Engine;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Resolved document bytes with a human-readable source name.
pub struct ResolvedDocument {
    pub data: Vec<u8>,
    pub source_name: String,
}

/// Validate the magic bytes every channel must deliver.
fn ensure_pdf_header(data: &[u8], reason: &str) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: reason.to_string(),
        });
    }
    Ok(())
}

/// Resolve a file path to document bytes.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<ResolvedDocument> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path).map_err(Error::Io)?;
    ensure_pdf_header(&data, "Not a valid PDF file")?;

    Ok(ResolvedDocument {
        data,
        source_name: path.display().to_string(),
    })
}

/// Resolve a base64 payload (the `archivoBase64` form of a document upload)
/// to document bytes.
pub fn resolve_base64(base64_data: &str) -> Result<ResolvedDocument> {
    let data = base64::engine::general_purpose::STANDARD.decode(base64_data.trim())?;
    ensure_pdf_header(&data, "Decoded data is not a valid PDF file")?;

    Ok(ResolvedDocument {
        data,
        source_name: "<base64>".to_string(),
    })
}

/// Resolve an http(s) URL to document bytes, with a download size limit.
///
/// The body is read through a capped reader so an unbounded or lying
/// Content-Length cannot balloon memory.
pub fn resolve_url(url_str: &str, max_download_bytes: u64) -> Result<ResolvedDocument> {
    let parsed = url::Url::parse(url_str).map_err(|e| Error::SourceResolution {
        reason: format!("Invalid URL: {}", e),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::SourceResolution {
                reason: format!("Unsupported URL scheme: {}", other),
            })
        }
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(Error::HttpRequest)?;

    let response = client.get(parsed).send()?;

    if !response.status().is_success() {
        return Err(Error::SourceResolution {
            reason: format!("HTTP request failed with status: {}", response.status()),
        });
    }

    // Content-Length allows early rejection; the capped read below is what
    // actually enforces the limit.
    if let Some(content_length) = response.content_length() {
        if content_length > max_download_bytes {
            return Err(Error::DownloadTooLarge {
                size: content_length,
                max_size: max_download_bytes,
            });
        }
    }

    let mut data = Vec::new();
    response
        .take(max_download_bytes.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(Error::Io)?;

    if data.len() as u64 > max_download_bytes {
        return Err(Error::DownloadTooLarge {
            size: data.len() as u64,
            max_size: max_download_bytes,
        });
    }

    ensure_pdf_header(&data, "Downloaded data is not a valid PDF file")?;

    Ok(ResolvedDocument {
        data,
        source_name: url_str.to_string(),
    })
}
