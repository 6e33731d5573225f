//! Numeric token extraction
//!
//! The filtering pipeline that turns raw PDF text-layer content into the
//! candidate identifier numbers carried by a PILA document.

mod filter;

pub use filter::{extract_numbers, extract_numbers_with, ExtractionResult, FilterOptions};
