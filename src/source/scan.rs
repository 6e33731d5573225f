//! Directory scanning for PDF documents

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// A PDF file found during a directory scan.
#[derive(Debug, Clone, Serialize)]
pub struct PdfFileInfo {
    /// Full path to the PDF file
    pub path: String,
    /// Filename only
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Last modified time (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// List the PDF files under `dir`, sorted by path.
///
/// `pattern` is a glob matched against filenames (e.g. `pila*.pdf`).
/// Unreadable entries are skipped rather than failing the whole scan.
pub fn scan_directory(
    dir: &Path,
    recursive: bool,
    pattern: Option<&str>,
) -> Result<Vec<PdfFileInfo>> {
    if !dir.exists() {
        return Err(Error::PdfNotFound {
            path: dir.display().to_string(),
        });
    }

    if !dir.is_dir() {
        return Err(Error::SourceResolution {
            reason: format!("{} is not a directory", dir.display()),
        });
    }

    let pattern = match pattern {
        Some(p) => Some(glob::Pattern::new(p).map_err(|e| Error::SourceResolution {
            reason: format!("Invalid filename pattern {:?}: {}", p, e),
        })?),
        None => None,
    };

    let mut files = Vec::new();
    collect_pdfs(dir, recursive, &pattern, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

fn collect_pdfs(
    dir: &Path,
    recursive: bool,
    pattern: &Option<glob::Pattern>,
    files: &mut Vec<PdfFileInfo>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(Error::Io)?;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue, // Skip entries we can't read
        };

        let path = entry.path();

        if path.is_dir() {
            if recursive {
                let _ = collect_pdfs(&path, recursive, pattern, files);
            }
            continue;
        }

        if !path.is_file() {
            continue;
        }

        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Some(pat) = pattern {
            if !pat.matches(&name) {
                continue;
            }
        }

        let metadata = std::fs::metadata(&path).ok();
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .and_then(|d| chrono::DateTime::from_timestamp(d.as_secs() as i64, 0))
            .map(|dt| dt.to_rfc3339());

        files.push(PdfFileInfo {
            path: path.to_string_lossy().to_string(),
            name,
            size,
            modified,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"%PDF-1.4").unwrap();
    }

    #[test]
    fn scan_missing_directory_fails() {
        let result = scan_directory(Path::new("/nonexistent/dir"), false, None);
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn scan_finds_pdfs_sorted_and_ignores_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "b.pdf");
        touch(tmp.path(), "a.PDF");
        std::fs::write(tmp.path().join("notes.txt"), b"hi").unwrap();

        let files = scan_directory(tmp.path(), false, None).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
        assert!(files.iter().all(|f| f.size > 0));
    }

    #[test]
    fn scan_is_not_recursive_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        touch(&sub, "deep.pdf");

        assert!(scan_directory(tmp.path(), false, None).unwrap().is_empty());
        let recursive = scan_directory(tmp.path(), true, None).unwrap();
        assert_eq!(recursive.len(), 1);
        assert_eq!(recursive[0].name, "deep.pdf");
    }

    #[test]
    fn scan_applies_filename_pattern() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "pila-junio.pdf");
        touch(tmp.path(), "cedula.pdf");

        let files = scan_directory(tmp.path(), false, Some("pila*.pdf")).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "pila-junio.pdf");
    }

    #[test]
    fn scan_rejects_invalid_pattern() {
        let tmp = tempfile::tempdir().unwrap();
        let result = scan_directory(tmp.path(), false, Some("[unclosed"));
        assert!(matches!(result, Err(Error::SourceResolution { .. })));
    }
}
