use crate::error::{Rejection, ValidationError};

/// Collects every validation error of one run, in the order they were found.
///
/// A run owns exactly one `Validator`; appends need `&mut self`, so sharing
/// one across threads means wrapping it in a `Mutex` or building one per
/// field and combining them with [`Validator::merge`].
#[derive(Debug, Default, Clone)]
pub struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, section: &str, value: &str, message: &str) {
        tracing::debug!(section = %section, message = %message, "validation error recorded");
        self.errors.push(ValidationError::new(section, value, message));
    }

    /// Record a rejection returned by a parser or validator.
    pub fn reject(&mut self, section: &str, rejection: Rejection) {
        self.add_error(section, &rejection.value, &rejection.message);
    }

    pub fn has_error(&self, section: &str) -> bool {
        self.errors.iter().any(|err| err.section == section)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append the errors of another run after this one's.
    pub fn merge(&mut self, other: Validator) {
        self.errors.extend(other.errors);
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
