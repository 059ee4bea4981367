//! Plain-text exports
//!
//! File names follow the download names of the web client:
//! `preroll-report.txt`, `preroll-<section-id>.txt` and
//! `preroll-budget-<tier>.txt`.

use preroll_document::{BudgetTierSlice, CanonicalResult, Section};
use preroll_parse::{format_document, format_section, BudgetBreakdown};
use std::path::{Path, PathBuf};

/// Message for an export with nothing in it
pub const NOTHING_TO_DOWNLOAD: &str = "Nothing to download yet.";

/// File name of the whole-document export
pub const REPORT_FILE: &str = "preroll-report.txt";

/// Errors from building or writing exports
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Export text is blank
    #[error("Nothing to download yet.")]
    NothingToDownload,

    /// Writing an export failed
    #[error("failed to write {path}: {source}")]
    Io {
        /// Directory or file being written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

/// One export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// File name, no directory
    pub name: String,
    /// File contents
    pub contents: String,
}

impl ExportFile {
    /// Create export, refusing blank contents
    ///
    /// # Errors
    /// Returns `ExportError::NothingToDownload` when `contents` is blank.
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Result<Self, ExportError> {
        let contents = contents.into();
        if contents.trim().is_empty() {
            return Err(ExportError::NothingToDownload);
        }
        Ok(Self {
            name: name.into(),
            contents,
        })
    }
}

/// Whole document as `preroll-report.txt`
///
/// # Errors
/// Returns `ExportError::NothingToDownload` for an empty document.
pub fn report_file(result: &CanonicalResult) -> Result<ExportFile, ExportError> {
    ExportFile::new(REPORT_FILE, format_document(result))
}

/// One section as `preroll-<id>.txt`
///
/// # Errors
/// Returns `ExportError::NothingToDownload` if the section renders blank.
pub fn section_file(section: &Section) -> Result<ExportFile, ExportError> {
    ExportFile::new(format!("preroll-{}.txt", section.id()), format_section(section))
}

/// One budget tier as `preroll-budget-<tier>.txt`
///
/// # Errors
/// Returns `ExportError::NothingToDownload` for a tier absent from the reply.
pub fn tier_file(slice: &BudgetTierSlice) -> Result<ExportFile, ExportError> {
    ExportFile::new(format!("preroll-budget-{}.txt", slice.tier.as_str()), slice.text.clone())
}

/// Every export of a document: report, sections, then present tiers
///
/// # Errors
/// Returns `ExportError::NothingToDownload` for an empty document.
pub fn export_plan(
    result: &CanonicalResult,
    budget: &BudgetBreakdown,
) -> Result<Vec<ExportFile>, ExportError> {
    let mut files = vec![report_file(result)?];
    for section in result.sections() {
        files.push(section_file(section)?);
    }
    if let BudgetBreakdown::Tiered(slices) = budget {
        files.extend(slices.iter().filter_map(|slice| tier_file(slice).ok()));
    }
    Ok(files)
}

/// Write `files` into `dir`, creating it if needed
///
/// # Errors
/// Returns `ExportError::Io` for the first path that cannot be written.
pub async fn write_exports(dir: &Path, files: &[ExportFile]) -> Result<Vec<PathBuf>, ExportError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        tokio::fs::write(&path, &file.contents)
            .await
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "export written");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use preroll_document::BudgetTier;

    #[test]
    fn blank_exports_are_refused() {
        assert!(matches!(
            ExportFile::new(REPORT_FILE, " \n "),
            Err(ExportError::NothingToDownload)
        ));
        assert!(matches!(
            report_file(&CanonicalResult::empty("")),
            Err(ExportError::NothingToDownload)
        ));
        assert_eq!(ExportError::NothingToDownload.to_string(), NOTHING_TO_DOWNLOAD);
    }

    #[test]
    fn tier_names() {
        let file = tier_file(&BudgetTierSlice::new(BudgetTier::Medium, "MEDIUM BUDGET: $10K"))
            .expect("tier");
        assert_eq!(file.name, "preroll-budget-medium.txt");
        assert!(tier_file(&BudgetTierSlice::new(BudgetTier::High, "")).is_err());
    }

    #[test]
    fn section_names_use_ids() {
        let section = Section::new(3, "Key Actions", vec!["Chase".to_string()]);
        let file = section_file(&section).expect("section");
        assert_eq!(file.name, "preroll-key-actions-3.txt");
        assert_eq!(file.contents, "Key Actions\n- Chase");
    }

    #[tokio::test]
    async fn write_failure_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "file, not a directory").expect("blocker");

        let files = [ExportFile::new(REPORT_FILE, "A\n- one").expect("file")];
        match write_exports(&blocker, &files).await {
            Err(ExportError::Io { path, source }) => {
                assert_eq!(path, blocker);
                assert!(!source.to_string().is_empty());
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
