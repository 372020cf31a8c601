use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Checked, Rejection};

/// Placeholders an issue form writes for questions left unanswered.
const BLANK_SENTINELS: [&str; 3] = ["", "_No response_", "None"];

static ACCOUNT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[A-Za-z0-9_.-]+\.1password\.(com|ca|eu)/?$").unwrap()
});

/// Normalize the "no answer" placeholders to an empty string.
pub fn parse_input(value: &str) -> Checked<String> {
    if BLANK_SENTINELS.contains(&value) {
        return Ok(String::new());
    }

    Ok(value.to_string())
}

/// Reduce a 1Password account URL to its hostname.
///
/// The scheme is optional and defaults to `https`; only the `.com`, `.ca`
/// and `.eu` account domains are accepted. The hostname keeps the case it
/// was written in.
pub fn parse_account_url(value: &str) -> Checked<String> {
    if !ACCOUNT_URL_REGEX.is_match(value) {
        return Err(Rejection::new(value, "is an invalid account URL"));
    }

    let with_scheme = if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    };

    let url = Url::parse(&with_scheme).map_err(|e| Rejection::new(with_scheme.as_str(), e.to_string()))?;
    if url.host_str().is_none() {
        return Err(Rejection::new(with_scheme, "is an invalid account URL"));
    }

    // url lower-cases hosts; hand back the host as it was matched.
    let host = value
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    Ok(host.to_string())
}

/// Read a markdown checkbox (`[x]`, `[ ]` or `[]`) as `"true"` / `"false"`.
///
/// List markers and spaces in front of the box are ignored, as is case.
pub fn parse_checkbox(value: &str) -> Checked<String> {
    let lowered = value.to_lowercase();
    let trimmed = lowered.trim_start_matches(['-', ' ']);

    if trimmed.starts_with("[x]") {
        Ok("true".to_string())
    } else if trimmed.starts_with("[]") || trimmed.starts_with("[ ]") {
        Ok("false".to_string())
    } else {
        Err(Rejection::new(trimmed, "could not parse checkbox"))
    }
}

/// Parse the digits of a value as a number, ignoring everything else.
///
/// Signs and decimal points are dropped along with any other non-digit, so
/// `"-5"` reads as `5` and `"1.5"` as `15`.
pub fn parse_number(value: &str) -> Checked<u64> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    digits
        .parse::<u64>()
        .map_err(|_| Rejection::new(value, "could not be parsed into a number"))
}

/// Parse a boolean literal: `1`, `t`, `true` (any of `T`, `TRUE`, `True`)
/// and their false counterparts.
pub fn parse_bool(value: &str) -> Checked<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Rejection::new(value, "could not be parsed into a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_blank_sentinels() {
        for sentinel in ["", "_No response_", "None"] {
            assert_eq!(parse_input(sentinel), Ok(String::new()));
        }
    }

    #[test]
    fn test_parse_input_keeps_other_values() {
        assert_eq!(parse_input("none"), Ok("none".to_string()));
        assert_eq!(parse_input(" None "), Ok(" None ".to_string()));
        assert_eq!(parse_input("line one\nline two"), Ok("line one\nline two".to_string()));
    }

    #[test]
    fn test_parse_account_url_without_scheme() {
        assert_eq!(
            parse_account_url("example.1password.com"),
            Ok("example.1password.com".to_string())
        );
    }

    #[test]
    fn test_parse_account_url_strips_scheme_and_slash() {
        assert_eq!(
            parse_account_url("https://team.1password.eu/"),
            Ok("team.1password.eu".to_string())
        );
        assert_eq!(
            parse_account_url("http://my-org.1password.ca"),
            Ok("my-org.1password.ca".to_string())
        );
    }

    #[test]
    fn test_parse_account_url_keeps_host_case() {
        assert_eq!(
            parse_account_url("EXAMPLE.1password.com"),
            Ok("EXAMPLE.1password.com".to_string())
        );
        assert_eq!(
            parse_account_url("https://My-Team.1password.com/"),
            Ok("My-Team.1password.com".to_string())
        );
    }

    #[test]
    fn test_parse_account_url_rejects_other_domains() {
        for input in [
            "http://foo.bar.com",
            "example.1password.org",
            "1password.com",
            "example.1password.com/path",
            "ftp://example.1password.com",
            "",
        ] {
            let err = parse_account_url(input).unwrap_err();
            assert_eq!(err.message, "is an invalid account URL", "input: {input}");
            assert_eq!(err.value, input);
        }
    }

    #[test]
    fn test_parse_checkbox() {
        assert_eq!(parse_checkbox("- [x] done"), Ok("true".to_string()));
        assert_eq!(parse_checkbox("- [X] Done"), Ok("true".to_string()));
        assert_eq!(parse_checkbox("- [ ] pending"), Ok("false".to_string()));
        assert_eq!(parse_checkbox("[]"), Ok("false".to_string()));
        assert_eq!(parse_checkbox("  --[x]"), Ok("true".to_string()));
    }

    #[test]
    fn test_parse_checkbox_rejects_unknown_token() {
        let err = parse_checkbox("- [y]").unwrap_err();
        assert_eq!(err.message, "could not parse checkbox");
        assert_eq!(err.value, "[y]");

        assert!(parse_checkbox("").is_err());
        assert!(parse_checkbox("* [x] starred list").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42 items"), Ok(42));
        assert_eq!(parse_number("1,024"), Ok(1024));
        assert_eq!(parse_number("0"), Ok(0));
    }

    #[test]
    fn test_parse_number_rejects_missing_digits() {
        let err = parse_number("abc").unwrap_err();
        assert_eq!(err.message, "could not be parsed into a number");
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_number_drops_sign_and_decimal_point() {
        assert_eq!(parse_number("-5"), Ok(5));
        assert_eq!(parse_number("1.5"), Ok(15));
        assert_eq!(parse_number("1-2-3"), Ok(123));
    }

    #[test]
    fn test_parse_number_overflow_is_rejected() {
        assert!(parse_number("99999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_bool() {
        for input in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(input), Ok(true), "input: {input}");
        }
        for input in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(input), Ok(false), "input: {input}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_spellings() {
        for input in ["yes", "tRUE", " true", ""] {
            let err = parse_bool(input).unwrap_err();
            assert_eq!(err.message, "could not be parsed into a boolean");
        }
    }
}
