//! Validation schema: named fields with ordered rule lists.

use std::collections::BTreeMap;
use std::fmt;

use super::rule::Rule;
use super::Values;

/// Per-field error messages from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Record an error for `field`. An existing message for the field is
    /// kept, so the first failing rule wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `field: message` pairs joined with `; `, in field-name order.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

/// A declarative schema over a form's values.
///
/// Every field is checked (no early abort across fields); within a field the
/// rules run in declaration order and the first failure is reported.
///
/// ```
/// use gobarber::form::{Rule, Schema};
///
/// let schema = Schema::new()
///     .field("email", [Rule::required("Email is required"), Rule::email("Enter a valid email")])
///     .field("password", [Rule::required("Password is required")]);
/// assert_eq!(schema.fields().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field. Declaring a field twice appends to its rules.
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let name = name.into();
        let rules = rules.into_iter();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.rules.extend(rules),
            None => self.fields.push(FieldRules {
                name,
                rules: rules.collect(),
            }),
        }
        self
    }

    /// Names of the fields the schema knows about, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validate `values`. A field missing from `values` is checked as empty.
    pub fn validate(&self, values: &Values) -> Result<Values, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in &self.fields {
            let value = values.get(&field.name).map(String::as_str).unwrap_or("");
            if let Some(failed) = field.rules.iter().find(|rule| !rule.check(value, values)) {
                errors.insert(field.name.clone(), failed.message());
            }
        }

        if errors.is_empty() {
            Ok(values.clone())
        } else {
            Err(errors)
        }
    }
}
