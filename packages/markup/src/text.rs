use scraper::Html;

/// Collect every text node of an HTML document, in document order.
///
/// Whitespace-only nodes between block elements are kept, so paragraph and
/// line breaks survive as `\n`.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::trace!(errors = document.errors.len(), "html parsed with recoverable errors");
    }

    document.root_element().text().collect()
}
