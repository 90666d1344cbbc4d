//! Forms
//!
//! Raw form input is validated before any request is made. Every failing
//! field gets one localized message, in field order.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use smallvec::SmallVec;
use thiserror::Error;

/// Customer form.
pub mod customer;
/// Order form.
pub mod order;
/// Vehicle form.
pub mod vehicle;

pub use customer::{CustomerForm, FormMode, ValidCustomer};
pub use order::OrderForm;
pub use vehicle::VehicleForm;

/// Message for numeric input that does not parse.
pub const INVALID_FORMAT: &str = "Invalid format";

/// Validation message for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the error belongs to.
    pub field: &'static str,
    /// Localized message.
    pub message: String,
}

/// Every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationErrors {
    /// Record `message` against `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Errors in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(value)` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when any field failed.
    pub fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, Self> {
        if !self.is_empty() {
            return Err(self);
        }

        value().ok_or(self)
    }

    fn required<'a>(
        &mut self,
        field: &'static str,
        input: &'a str,
        message: &str,
    ) -> Option<&'a str> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            self.push(field, message);

            return None;
        }

        Some(trimmed)
    }

    fn required_number<N: FromStr>(
        &mut self,
        field: &'static str,
        input: &str,
        message: &str,
    ) -> Option<N> {
        let value = self.required(field, input, message)?;

        value.parse().ok().or_else(|| {
            self.push(field, INVALID_FORMAT);

            None
        })
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{}: {}", error.field, error.message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_missing() {
        let mut errors = ValidationErrors::default();

        assert_eq!(errors.required("name", "   ", "Nama harus diisi"), None);
        assert_eq!(errors.get("name"), Some("Nama harus diisi"));
    }

    #[test]
    fn non_numeric_input_is_invalid() {
        let mut errors = ValidationErrors::default();

        assert_eq!(errors.required_number::<u16>("year", "20x1", "Tahun harus diisi"), None);
        assert_eq!(errors.required_number::<u16>("seats", " 7 ", "-"), Some(7));
        assert_eq!(errors.to_string(), "year: Invalid format");
    }

    #[test]
    fn finish_only_succeeds_without_errors() {
        let mut errors = ValidationErrors::default();

        assert_eq!(errors.clone().finish(|| Some(1)), Ok(1));

        errors.push("model", "Model mobil harus diisi");

        assert_eq!(errors.len(), 1);
        assert!(errors.finish(|| Some(1)).is_err());
    }
}
