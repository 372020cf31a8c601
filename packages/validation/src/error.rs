use std::fmt;

/// Result of a single parse or validation stage.
///
/// `Ok` carries the cleaned value, `Err` the reason the value was refused.
pub type Checked<T> = Result<T, Rejection>;

/// A value refused by a parser or validator.
///
/// `message` is a lower-case fragment with the subject left out, meant to be
/// read after the field name ("Email is an invalid email").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub value: String,
    pub message: String,
}

impl Rejection {
    pub fn new(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// A failed check tied to a form section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub section: String,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(section: &str, value: &str, message: &str) -> Self {
        Self {
            section: section.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.section, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Email", "nope", "is an invalid email");
        assert_eq!(err.to_string(), "Email: is an invalid email");
    }

    #[test]
    fn test_rejection_display_is_message_only() {
        let rejection = Rejection::new("", "is empty");
        assert_eq!(rejection.to_string(), "is empty");
    }
}
