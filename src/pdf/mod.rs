// src/pdf/mod.rs
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),
}

/// Extracts the text of every page of an in-memory PDF.
///
/// Page texts are joined with newlines by the extractor. Fails when the
/// bytes are not a parseable PDF.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let result = extract_text(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Extraction(_))));
    }

    #[test]
    fn test_empty_input_fails_extraction() {
        assert!(extract_text(&[]).is_err());
    }
}
