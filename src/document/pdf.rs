use std::path::Path;

/// Extract text from a PDF by concatenating per-page extraction output.
///
/// Empty output is possible for image-only documents; the caller decides
/// whether to fall back to a plain text decode.
pub fn extract_pdf_text(path: &Path) -> Result<String, String> {
    let document = lopdf::Document::load(path)
        .map_err(|error| format!("failed reading pdf '{}': {error}", path.display()))?;

    let mut content = String::new();
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number]).map_err(|error| {
            format!(
                "failed extracting text from page {page_number} of '{}': {error}",
                path.display()
            )
        })?;
        content.push_str(&page_text);
    }

    Ok(content)
}
