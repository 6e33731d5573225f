//! PDF processing layer
//!
//! Text-layer access over PDFium, behind a trait so the rest of the crate
//! never depends on the engine directly.

mod reader;

pub use reader::{join_pages, PdfiumReader, TextLayerReader};
