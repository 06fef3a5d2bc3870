//! Report assembly and persistence.
//!
//! [`assemble`] is a pure function: identical inputs always produce
//! byte-identical markdown (no timestamps, no randomness), so the report is
//! testable even though the findings it renders come from a non-deterministic
//! conversation. Persistence is a separate, caller-invoked step.

use crate::types::{AppError, PaperResultSet, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render the research report for `query`.
///
/// The document contains a header naming the query, one subsection per paper
/// in set order (title, then whichever of year/authors/URL are present, then
/// the paper's finding text when non-empty), and a single trailing synthesis
/// subsection. A zero-paper set still yields a valid document.
pub fn assemble(
    query: &str,
    papers: &PaperResultSet,
    findings: &BTreeMap<String, String>,
    synthesis: &str,
) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# Research Report: {}\n", query));

    for (index, paper) in papers.records().iter().enumerate() {
        doc.push('\n');
        doc.push_str(&format!("## {}. {}\n", index + 1, paper.title));

        let mut meta = String::new();
        if let Some(year) = paper.year {
            meta.push_str(&format!("- Year: {}\n", year));
        }
        if !paper.authors.is_empty() {
            meta.push_str(&format!("- Authors: {}\n", paper.authors.join(", ")));
        }
        if let Some(url) = &paper.url {
            meta.push_str(&format!("- URL: {}\n", url));
        }
        if !meta.is_empty() {
            doc.push('\n');
            doc.push_str(&meta);
        }

        if let Some(finding) = findings.get(&paper.title) {
            if !finding.is_empty() {
                doc.push('\n');
                doc.push_str(finding);
                if !finding.ends_with('\n') {
                    doc.push('\n');
                }
            }
        }
    }

    doc.push('\n');
    doc.push_str("## Synthesis\n");
    if !synthesis.is_empty() {
        doc.push('\n');
        doc.push_str(synthesis);
        if !synthesis.ends_with('\n') {
            doc.push('\n');
        }
    }

    doc
}

/// Persist `contents` to `path` with temp-file-then-rename semantics,
/// overwriting any prior report.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] naming the destination path when any
/// step fails.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to create directory for {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parent
        }
        _ => Path::new("."),
    };

    // Stage in the destination directory so the final rename never crosses
    // filesystems.
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| {
        AppError::Persistence(format!("Failed to stage report for {}: {}", path.display(), e))
    })?;

    staged.write_all(contents.as_bytes()).map_err(|e| {
        AppError::Persistence(format!("Failed to write report to {}: {}", path.display(), e))
    })?;

    staged.persist(path).map_err(|e| {
        AppError::Persistence(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
