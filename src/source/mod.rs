//! Document source resolution and discovery

pub mod resolver;
pub mod scan;

pub use resolver::{resolve_base64, resolve_path, resolve_url, ResolvedDocument};
pub use scan::{scan_directory, PdfFileInfo};
