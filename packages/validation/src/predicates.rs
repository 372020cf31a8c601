use lettre::message::Mailbox;
use url::Url;

use crate::error::{Checked, Rejection};

/// Roles an applicant may hold in the project they apply for.
pub const PROJECT_ROLES: &[&str] = &[
    "Founder or Owner",
    "Team Member or Employee",
    "Project Lead",
    "Core Maintainer",
    "Developer",
    "Organizer or Admin",
    "Program Manager",
];

pub fn is_present(value: &str) -> Checked<String> {
    if value.is_empty() {
        return Err(Rejection::new(value, "is empty"));
    }

    Ok(value.to_string())
}

/// Accepts any RFC 5322 mailbox, including the `Name <address>` form.
/// An empty value passes; pair with [`is_present`] to require one.
pub fn is_email(value: &str) -> Checked<String> {
    if value.is_empty() || value.parse::<Mailbox>().is_ok() {
        return Ok(value.to_string());
    }

    Err(Rejection::new(value, "is an invalid email"))
}

/// Accepts absolute `http` and `https` URLs. An empty value passes.
///
/// The value is checked as written: whitespace or control characters
/// anywhere in it make it invalid, and a bare path such as `/docs` has no
/// scheme at all.
pub fn is_url(value: &str) -> Checked<String> {
    if value.is_empty() {
        return Ok(value.to_string());
    }

    // Url::parse silently drops tabs and newlines and trims spaces.
    let starts_well = value.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/');
    if !starts_well || value.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(Rejection::new(value, "is an invalid URL"));
    }

    if value.starts_with('/') {
        return Err(Rejection::new(value, "must use \"http\" or \"https\" scheme"));
    }

    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(_) => return Err(Rejection::new(value, "is an invalid URL")),
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Rejection::new(value, "must use \"http\" or \"https\" scheme"));
    }

    Ok(value.to_string())
}

/// Exact, case-sensitive match against [`PROJECT_ROLES`].
pub fn is_project_role(value: &str) -> Checked<String> {
    if PROJECT_ROLES.contains(&value) {
        return Ok(value.to_string());
    }

    Err(Rejection::new(value, "is an invalid project role"))
}

/// Expects the output of [`crate::parse_checkbox`].
pub fn is_checked(value: &str) -> Checked<String> {
    if value != "true" {
        return Err(Rejection::new(value, "must be checked"));
    }

    Ok(value.to_string())
}
