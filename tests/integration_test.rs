//! Integration tests for pila-extract
//!
//! Everything here runs without a PDF engine present: the extraction flow is
//! driven through a stub text-layer reader.

use base64::Engine;
use pila_extract::{
    extract_numbers, extract_numbers_with, scan_directory, DocumentExtractor, DocumentSource,
    ExtractionResult, ExtractorConfig, FilterOptions, Result, TextLayerReader,
};
use pretty_assertions::assert_eq;

/// Reader that serves canned page text regardless of the bytes handed in.
struct StubReader {
    pages: Vec<String>,
}

impl TextLayerReader for StubReader {
    fn page_texts(&self, _data: &[u8], _password: Option<&str>) -> Result<Vec<String>> {
        Ok(self.pages.clone())
    }
}

fn stub_extractor(pages: &[&str]) -> DocumentExtractor<StubReader> {
    DocumentExtractor::with_reader(
        StubReader {
            pages: pages.iter().map(|p| p.to_string()).collect(),
        },
        ExtractorConfig::default(),
    )
}

fn pdf_base64(content: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(content)
}

#[test]
fn filter_discards_letters_and_short_numbers() {
    let result = extract_numbers("abc 123 45678");
    assert!(result.success);
    assert_eq!(result.text, "45678");
}

#[test]
fn filter_removes_monetary_amounts() {
    let result = extract_numbers("Total: 1,234,567.89 due");
    assert!(!result.success);
    assert_eq!(result.text, "");
    assert!(result.error.is_some());
}

#[test]
fn filter_keeps_long_identifiers_and_drops_lone_zero() {
    let result = extract_numbers("Ref 000123456 and 0");
    assert_eq!(result, ExtractionResult::matched("000123456".to_string()));
}

#[test]
fn filter_strips_parentheses_and_drops_four_digit_tokens() {
    let result = extract_numbers("(12345) - 6789");
    assert_eq!(result, ExtractionResult::matched("12345".to_string()));
}

#[test]
fn filter_on_empty_input_reports_no_numbers() {
    let result = extract_numbers("");
    assert!(!result.success);
    assert_eq!(result.text, "");
    assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
}

#[test]
fn filter_output_is_stable_under_reapplication() {
    let first = extract_numbers("Aportes 2024-06: 8123456789 (900123456) por 1,250,300.00");
    assert!(first.success);
    let second = extract_numbers(&first.text);
    assert_eq!(second, first);
}

#[test]
fn legacy_filter_is_selectable() {
    let legacy = FilterOptions::legacy();
    assert!(!extract_numbers_with("12345", &legacy).success);
    assert!(extract_numbers_with("123456", &legacy).success);
}

#[test]
fn extraction_joins_pages_before_filtering() {
    let extractor = stub_extractor(&[
        "Planilla No. 8123456789",
        "",
        "Periodo 2024-06 Total 1,250,300",
    ]);

    let result = extractor.extract_bytes(b"%PDF-1.4");
    assert!(result.success);
    assert_eq!(result.text, "8123456789 202406");
}

#[test]
fn document_without_numbers_is_a_validation_outcome_not_an_error() {
    let extractor = stub_extractor(&["Sin datos numéricos relevantes"]);

    let result = extractor.extract_bytes(b"%PDF-1.4");
    assert!(!result.success);
    assert!(result
        .error
        .as_deref()
        .is_some_and(|e| e.contains("criterios de filtrado")));
}

#[test]
fn base64_source_flows_end_to_end() {
    let extractor = stub_extractor(&["Documento 55667788"]);

    let report = extractor.extract_source(&DocumentSource::Base64 {
        base64: pdf_base64(b"%PDF-1.4 stub"),
    });
    assert!(report.success);
    assert_eq!(report.source, "<base64>");
    assert_eq!(report.text, "55667788");
}

#[test]
fn invalid_base64_payload_reports_spanish_message() {
    let extractor = stub_extractor(&["ignored"]);

    let report = extractor.extract_source(&DocumentSource::Base64 {
        base64: "!!! not base64 !!!".to_string(),
    });
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("El contenido base64 no es válido."));
}

#[test]
fn non_pdf_base64_payload_is_rejected() {
    let extractor = stub_extractor(&["ignored"]);

    let report = extractor.extract_source(&DocumentSource::Base64 {
        base64: pdf_base64(b"plain text, no header"),
    });
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("El archivo no es un PDF válido."));
}

#[test]
fn missing_file_reports_spanish_message() {
    let extractor = stub_extractor(&["ignored"]);

    let report = extractor.extract_source(&DocumentSource::Path {
        path: "/nonexistent/pila.pdf".to_string(),
    });
    assert!(!report.success);
    assert_eq!(report.source, "/nonexistent/pila.pdf");
    assert_eq!(report.error.as_deref(), Some("No se encontró el archivo PDF."));
}

#[test]
fn path_source_flows_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("planilla.pdf");
    std::fs::write(&file, b"%PDF-1.4 stub content").unwrap();

    let extractor = stub_extractor(&["Aporte 987654321"]);
    let report = extractor.extract_source(&DocumentSource::Path {
        path: file.display().to_string(),
    });
    assert!(report.success);
    assert_eq!(report.text, "987654321");
}

#[test]
fn report_json_omits_error_on_success() {
    let extractor = stub_extractor(&["Documento 55667788"]);
    let report = extractor.extract_source(&DocumentSource::Base64 {
        base64: pdf_base64(b"%PDF-1.4 stub"),
    });

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["text"], "55667788");
    assert!(json.get("error").is_none());
}

#[test]
fn custom_filter_config_is_honored() {
    let extractor = DocumentExtractor::with_reader(
        StubReader {
            pages: vec!["12345 1234567".to_string()],
        },
        ExtractorConfig {
            filter: FilterOptions {
                min_digits: 7,
                strip_grouped_amounts: true,
            },
            ..Default::default()
        },
    );

    let result = extractor.extract_bytes(b"%PDF-1.4");
    assert_eq!(result.text, "1234567");
}

#[test]
fn scan_lists_only_matching_pdfs() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("pila-2024-06.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(tmp.path().join("soat.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(tmp.path().join("listado.csv"), b"a;b;c").unwrap();

    let all = scan_directory(tmp.path(), false, None).unwrap();
    assert_eq!(all.len(), 2);

    let filtered = scan_directory(tmp.path(), false, Some("pila*.pdf")).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "pila-2024-06.pdf");
    assert!(filtered[0].modified.is_some());
}
