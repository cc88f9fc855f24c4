use anyhow::{anyhow, Result};

/// Extracts plain text from in-memory PDF bytes.
///
/// No constraint on page count, size, or encoding — whatever the extraction
/// library accepts goes through, and whatever it rejects surfaces as an error
/// for the caller's failure path.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow!("Failed to extract text from PDF: {e}"))
}
