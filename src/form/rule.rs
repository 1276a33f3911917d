//! Declarative validation rules for a single form field.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Values;

/// One validation rule. Each rule carries the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must be non-empty.
    Required { message: String },

    /// A non-empty value must look like an email address.
    Email { message: String },

    /// The value must have at least `min` characters.
    MinLength { min: usize, message: String },

    /// The value must be non-empty when `field` is non-empty.
    RequiredIf { field: String, message: String },

    /// The value must equal the value of `field`.
    Matches { field: String, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn required_if(field: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::RequiredIf {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn matches(field: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::Matches {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::MinLength { message, .. }
            | Rule::RequiredIf { message, .. }
            | Rule::Matches { message, .. } => message,
        }
    }

    /// Check `value` against this rule. `values` gives access to sibling
    /// fields for the cross-field rules; a missing sibling reads as empty.
    pub fn check(&self, value: &str, values: &Values) -> bool {
        let sibling = |field: &str| values.get(field).map(String::as_str).unwrap_or("");

        match self {
            Rule::Required { .. } => !value.is_empty(),
            Rule::Email { .. } => value.is_empty() || is_email(value),
            Rule::MinLength { min, .. } => value.chars().count() >= *min,
            Rule::RequiredIf { field, .. } => sibling(field).is_empty() || !value.is_empty(),
            Rule::Matches { field, .. } => value == sibling(field),
        }
    }
}

/// Email pattern: a local part of letters, digits and the printable symbols
/// allowed unquoted, then at least two dot-separated domain labels of
/// letters, digits and inner hyphens.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("Invalid email regex pattern")
});

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required() {
        let rule = Rule::required("Name is required");
        assert!(!rule.check("", &Values::new()));
        assert!(rule.check("Ana", &Values::new()));
        assert_eq!(rule.message(), "Name is required");
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(is_email("ana@example.com"));
        assert!(is_email("ana.maria+tag@mail.example.com.br"));
        assert!(is_email("o'brien_99@my-barber.co"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in [
            "ana",
            "ana@",
            "@example.com",
            "ana@example",
            "ana@example.",
            "ana@@example.com",
            "ana @example.com",
            "ana@.com",
            "a,b@example.com",
            "a<b>@example.com",
            "ana@exa$mple.com",
            "\"@example.com",
            "ana@-example.com",
            "ana@example-.com",
        ] {
            assert!(!is_email(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_email_rule_skips_empty() {
        let rule = Rule::email("Enter a valid email");
        assert!(rule.check("", &Values::new()));
        assert!(!rule.check("not-an-email", &Values::new()));
    }

    #[test]
    fn test_min_length_boundary() {
        let rule = Rule::min_length(6, "At least 6 characters");
        assert!(!rule.check("12345", &Values::new()));
        assert!(rule.check("123456", &Values::new()));
        assert!(!rule.check("", &Values::new()));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::min_length(6, "At least 6 characters");
        assert!(rule.check("çãéíóú", &Values::new()));
    }

    #[test]
    fn test_required_if() {
        let rule = Rule::required_if("old_password", "Required");
        assert!(rule.check("", &values(&[("old_password", "")])));
        assert!(rule.check("", &Values::new()));
        assert!(!rule.check("", &values(&[("old_password", "secret")])));
        assert!(rule.check("new", &values(&[("old_password", "secret")])));
    }

    #[test]
    fn test_matches() {
        let rule = Rule::matches("password", "Confirmation does not match");
        assert!(rule.check("abc123", &values(&[("password", "abc123")])));
        assert!(!rule.check("abc124", &values(&[("password", "abc123")])));
        assert!(rule.check("", &Values::new()));
    }
}
