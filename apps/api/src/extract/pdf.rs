//! PDF text extraction via `pdf-extract`, with whitespace normalization.

use super::ExtractError;

/// Extracts text from in-memory PDF bytes. Collapses whitespace runs within
/// lines but keeps line structure, since the analysis engine splits on
/// sentence punctuation anyway.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(normalize(&raw))
}

fn normalize(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs_and_drops_blank_lines() {
        let raw = "Senior   Engineer\n\n\nBuilt\tRust  services\n   \n";
        assert_eq!(normalize(raw), "Senior Engineer\nBuilt Rust services");
    }

    #[test]
    fn test_garbage_bytes_are_a_pdf_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
