//! Form layer: named field registration, schema validation on submit and
//! per-field error lookup.
//!
//! A [`Form`] holds the registered fields of one mounted form. Submitting
//! collects the registered values, runs them through a [`Schema`] and either
//! hands back the validated values or stores one message per failing field.
//! Errors always reflect the most recent submission.

mod rule;
mod schema;

use std::collections::BTreeMap;

pub use rule::{is_email, Rule};
pub use schema::{Schema, ValidationErrors};

/// Field name to current value.
pub type Values = BTreeMap<String, String>;

/// What pressing the keyboard's return key on a field should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnKey {
    /// Move focus to the named field.
    Focus(String),
    /// Submit the form (last field).
    Submit,
}

/// State of one mounted form.
#[derive(Debug, Clone, Default)]
pub struct Form {
    /// Registration order, used for focus traversal.
    order: Vec<String>,
    values: Values,
    errors: ValidationErrors,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with the given fields registered, all empty.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::new();
        for field in fields {
            form.register(field);
        }
        form
    }

    /// Register a field under a unique name.
    ///
    /// Returns `false` (and changes nothing) if the name is already taken.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.values.contains_key(&name) {
            return false;
        }
        self.order.push(name.clone());
        self.values.insert(name, String::new());
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Prefill registered fields; unknown names are ignored.
    pub fn set_initial_data<'a, I>(&mut self, data: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in data {
            self.set_value(name, value);
        }
    }

    /// Update a registered field. Returns `false` for unknown fields.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Error message for `name` from the last submission, if it failed.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Replace the stored errors, keeping only those for registered fields.
    pub fn set_errors(&mut self, errors: &ValidationErrors) {
        let mut kept = ValidationErrors::default();
        for (field, message) in errors.iter().filter(|(f, _)| self.is_registered(f)) {
            kept.insert(field, message);
        }
        self.errors = kept;
    }

    pub fn clear_errors(&mut self) {
        self.errors = ValidationErrors::default();
    }

    /// Return-key behaviour for a field: focus the next registered field, or
    /// submit from the last one. `None` for unknown fields.
    pub fn return_key(&self, name: &str) -> Option<ReturnKey> {
        let index = self.order.iter().position(|f| f == name)?;
        Some(match self.order.get(index + 1) {
            Some(next) => ReturnKey::Focus(next.clone()),
            None => ReturnKey::Submit,
        })
    }

    /// Validate the current values against `schema`.
    ///
    /// Clears previous errors first, so after this call a field has an error
    /// if and only if this pass rejected it.
    pub fn submit(&mut self, schema: &Schema) -> Result<Values, ValidationErrors> {
        self.clear_errors();
        let result = schema.validate(&self.values);
        if let Err(errors) = &result {
            self.set_errors(errors);
        }
        result
    }
}
