//! Numeric token filter for PILA document text
//!
//! Takes the raw text layer of a payroll-contribution PDF and reduces it to
//! the tokens that plausibly are identifier numbers (contribution period
//! codes, document numbers). Monetary amounts and short incidental numbers
//! (page numbers, small counts) are removed along the way.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Characters that may appear in numeric/tabular content. Everything else
/// (letters, colons, currency signs, ...) is deleted outright.
static NON_NUMERIC_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,+*/=%()\s-]+").expect("valid content regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Thousands-grouped literals (`12,345` or `1,234,567.89`): monetary amounts,
/// which must not be mistaken for identifiers.
static GROUPED_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b").expect("valid amount regex"));

const NO_NUMBERS_MESSAGE: &str =
    "No se encontraron números válidos en el PDF según los criterios de filtrado.";

/// Result of a number extraction pass.
///
/// `success` is true iff at least one token survived filtering; `text` holds
/// the surviving tokens joined by single spaces. `error` carries the
/// user-facing reason and is set only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Successful extraction with the space-joined surviving tokens.
    pub fn matched(text: String) -> Self {
        Self {
            success: true,
            text,
            error: None,
        }
    }

    /// No token survived filtering. This is a normal, expected outcome, not
    /// an exceptional one.
    pub fn no_matches() -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(NO_NUMBERS_MESSAGE.to_string()),
        }
    }

    /// Extraction could not run at all (unreadable document, engine failure).
    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(message),
        }
    }
}

/// Filter thresholds and policies.
///
/// Two variants of this filter exist in the field; both are kept selectable
/// so the difference stays visible instead of being resolved silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Minimum number of digit characters a token must retain, punctuation
    /// inside the token ignored.
    pub min_digits: usize,
    /// Delete thousands-grouped literals before tokenizing, so monetary
    /// amounts cannot pass the digit-count check once their commas are gone.
    pub strip_grouped_amounts: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_digits: 5,
            strip_grouped_amounts: true,
        }
    }
}

impl FilterOptions {
    /// The earlier variant of the filter: six-digit minimum, no
    /// grouped-amount removal.
    pub fn legacy() -> Self {
        Self {
            min_digits: 6,
            strip_grouped_amounts: false,
        }
    }
}

/// Extract candidate identifier numbers from document text using the default
/// filter.
pub fn extract_numbers(text: &str) -> ExtractionResult {
    extract_numbers_with(text, &FilterOptions::default())
}

/// Extract candidate identifier numbers from document text.
///
/// Pure and infallible: any string input yields a result, and an input with
/// no qualifying numbers reports `success: false` rather than an error.
pub fn extract_numbers_with(text: &str, options: &FilterOptions) -> ExtractionResult {
    let mut cleaned = collapse(&NON_NUMERIC_CONTENT.replace_all(text, ""));

    // Amount removal must happen before tokenizing: once commas are stripped
    // a money figure would retain enough digits to pass the length check.
    if options.strip_grouped_amounts {
        cleaned = collapse(&GROUPED_AMOUNT.replace_all(&cleaned, ""));
    }

    let surviving: Vec<String> = cleaned
        .split_whitespace()
        .filter_map(|token| surviving_digits(token, options.min_digits))
        .collect();

    tracing::debug!(
        input_len = text.len(),
        surviving = surviving.len(),
        "number filter pass"
    );

    if surviving.is_empty() {
        ExtractionResult::no_matches()
    } else {
        ExtractionResult::matched(surviving.join(" "))
    }
}

fn collapse(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Decide whether `token` survives filtering; survivors are emitted as their
/// digit characters, so `(12345)` comes out as `12345`.
fn surviving_digits(token: &str, min_digits: usize) -> Option<String> {
    // Stand-alone punctuation left over from tabular layouts.
    if matches!(token, "(" | ")" | "." | "," | "-") {
        return None;
    }
    // A lone zero is a filler value, never an identifier.
    if token == "0" {
        return None;
    }

    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < min_digits {
        return None;
    }

    Some(digits)
}
