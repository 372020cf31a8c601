use crate::error::Checked;

/// A string validator: returns the (possibly cleaned) value or a rejection.
///
/// Implemented for every `Fn(&str) -> Checked<String>`, so the predicate
/// functions of this crate and ad-hoc closures can be used wherever a
/// validator is expected.
pub trait Validate {
    fn validate(&self, value: &str) -> Checked<String>;
}

impl<F> Validate for F
where
    F: Fn(&str) -> Checked<String>,
{
    fn validate(&self, value: &str) -> Checked<String> {
        self(value)
    }
}

/// Runs the inner validator only when the condition held at construction
/// time; otherwise passes the value through untouched.
#[derive(Debug, Clone, Copy)]
pub struct When<V> {
    condition: bool,
    validator: V,
}

impl<V: Validate> Validate for When<V> {
    fn validate(&self, value: &str) -> Checked<String> {
        if self.condition {
            self.validator.validate(value)
        } else {
            Ok(value.to_string())
        }
    }
}

/// Apply `validator` only if `condition` is true.
///
/// Lets a caller keep a straight-line pipeline for a field whose rules depend
/// on another field:
///
/// ```
/// use validation::{is_present, when, Validate};
///
/// let team_application = false;
/// let rule = when(team_application, is_present);
/// assert_eq!(rule.validate(""), Ok(String::new()));
/// ```
pub fn when<V: Validate>(condition: bool, validator: V) -> When<V> {
    When {
        condition,
        validator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;
    use crate::predicates::{is_checked, is_present};

    fn always_reject(value: &str) -> Checked<String> {
        Err(Rejection::new(value, "rejected"))
    }

    #[test]
    fn test_when_false_passes_through() {
        for input in ["", "anything", "  spaced  ", "_No response_"] {
            assert_eq!(when(false, always_reject).validate(input), Ok(input.to_string()));
        }
    }

    #[test]
    fn test_when_true_is_inner_validator() {
        for input in ["", "true", "false"] {
            assert_eq!(when(true, is_checked).validate(input), is_checked(input));
            assert_eq!(when(true, is_present).validate(input), is_present(input));
        }
    }

    #[test]
    fn test_closure_is_a_validator() {
        let upper = |value: &str| -> Checked<String> { Ok(value.to_uppercase()) };
        assert_eq!(when(true, upper).validate("abc"), Ok("ABC".to_string()));
        assert_eq!(when(false, upper).validate("abc"), Ok("abc".to_string()));
    }

    #[test]
    fn test_nested_when() {
        let rule = when(true, when(false, always_reject));
        assert_eq!(rule.validate("x"), Ok("x".to_string()));
    }
}
