// Resume text extraction. Accepted upload kinds are determined by filename
// extension; extraction failures surface as 400s with a descriptive message.

pub mod docx;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error processing PDF file: {0}")]
    Pdf(String),

    #[error("Error processing DOCX file: {0}")]
    Docx(String),

    #[error("No text could be extracted from the file")]
    Empty,
}

/// Supported resume document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determines the kind from the uploaded filename, case-insensitive.
    /// Returns None for unsupported extensions.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

/// Extracts plain text from an uploaded resume. Rejects documents that yield
/// no text at all.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes)?,
        DocumentKind::Docx => docx::extract_text(bytes)?,
    };
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename_case_insensitive() {
        assert_eq!(
            DocumentKind::from_filename("Resume.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_filename("resume.docx"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_unsupported_extensions_rejected() {
        assert_eq!(DocumentKind::from_filename("resume.txt"), None);
        assert_eq!(DocumentKind::from_filename("resume.doc"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
    }

    #[test]
    fn test_docx_with_no_text_is_empty_error() {
        let bytes = docx::tests_support::build_docx("");
        let err = extract_text(DocumentKind::Docx, &bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Empty));
    }
}
