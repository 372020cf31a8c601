pub mod markdown;
pub mod text;

use std::fmt;

pub use markdown::render_markdown;
pub use text::extract_text;

/// Failure reported by a markup backend.
///
/// The display form is the backend's own message, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    Render(String),
    Parse(String),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::Render(message) => f.write_str(message.as_str()),
            MarkupError::Parse(message) => f.write_str(message.as_str()),
        }
    }
}

impl std::error::Error for MarkupError {}

/// Turns lightweight markup into plain text in two steps: render the source
/// to HTML, then read the text content back out of the HTML tree.
pub trait Markup {
    fn render(&self, source: &str) -> Result<String, MarkupError>;

    fn text_content(&self, html: &str) -> Result<String, MarkupError>;
}

/// CommonMark rendering backed by pulldown-cmark, text extraction backed by
/// an html5ever tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl Markup for CommonMark {
    fn render(&self, source: &str) -> Result<String, MarkupError> {
        Ok(render_markdown(source))
    }

    fn text_content(&self, html: &str) -> Result<String, MarkupError> {
        Ok(extract_text(html))
    }
}
