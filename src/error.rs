//! Error types for pila-extract

use thiserror::Error;

/// Result type alias for pila-extract
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pila-extract
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected and no password was provided
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Source resolution error
    #[error("Failed to resolve source: {reason}")]
    SourceResolution { reason: String },

    /// Download too large
    #[error("Download too large: {size} bytes (max: {max_size} bytes)")]
    DownloadTooLarge { size: u64, max_size: u64 },

    /// Base64 decode error
    #[error("Invalid base64 data: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },
}

impl Error {
    /// Return the user-facing message for this error, in the UI language of
    /// the surrounding system (Spanish). Internal details (paths, library
    /// errors, sizes) are omitted. Full details should be logged via tracing
    /// before calling this.
    pub fn user_message(&self) -> String {
        match self {
            Error::PdfNotFound { .. } => "No se encontró el archivo PDF.".to_string(),
            Error::InvalidPdf { .. } => "El archivo no es un PDF válido.".to_string(),
            Error::PasswordRequired => "El PDF está protegido con contraseña.".to_string(),
            Error::SourceResolution { .. } => {
                "No se pudo obtener el documento solicitado.".to_string()
            }
            Error::DownloadTooLarge { max_size, .. } => format!(
                "El documento supera el tamaño máximo permitido de {} bytes.",
                max_size
            ),
            Error::Base64Decode(_) => "El contenido base64 no es válido.".to_string(),
            Error::HttpRequest(_) => {
                "Error al descargar el documento, por favor revise su conexión.".to_string()
            }
            Error::Io(_) => "Error al leer el archivo.".to_string(),
            Error::Pdfium { .. } => "Error al procesar el PDF.".to_string(),
        }
    }
}
