use std::sync::LazyLock;

use markup::{CommonMark, Markup};
use regex::Regex;

use crate::error::{Checked, Rejection};

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap()
});

static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x{1F300}-\x{1F5FF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}",
        r"\x{1F700}-\x{1F77F}\x{1F780}-\x{1F7FF}\x{1F800}-\x{1F8FF}",
        r"\x{1F900}-\x{1F9FF}\x{1FA00}-\x{1FA6F}\x{1FA70}-\x{1FAFF}",
        r"\x{1FB00}-\x{1FBFF}]+",
    ))
    .unwrap()
});

/// Strip markdown from free text and refuse links, email addresses and emoji.
///
/// On success the value becomes the plain text, so later stages never see
/// the original markup.
pub fn is_regular_string(value: &str) -> Checked<String> {
    is_regular_string_with(&CommonMark, value)
}

/// [`is_regular_string`] with a caller-supplied markup backend.
pub fn is_regular_string_with<M: Markup + ?Sized>(markup: &M, value: &str) -> Checked<String> {
    let html = markup
        .render(value)
        .map_err(|e| Rejection::new(value, e.to_string()))?;
    let text = markup
        .text_content(&html)
        .map_err(|e| Rejection::new(value, e.to_string()))?;
    let text = text.trim();

    if URL_REGEX.is_match(text) {
        return Err(Rejection::new(text, "cannot contain URLs"));
    }

    if EMAIL_REGEX.is_match(text) {
        return Err(Rejection::new(text, "cannot contain email addresses"));
    }

    if EMOJI_REGEX.is_match(text) {
        return Err(Rejection::new(text, "cannot contain emoji characters"));
    }

    Ok(text.to_string())
}
