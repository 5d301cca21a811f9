//! Field-level validation helpers for inbound HTML forms.
//!
//! Failures are collected as [`FieldError`] values so a form can be
//! re-rendered with every problem attached to its field at once.

use std::fmt;

/// Machine-readable reason attached to a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorCode {
    Blank,
    NotAnInteger,
}

impl FieldErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::NotAnInteger => "not_an_integer",
        }
    }
}

/// Form field name as submitted by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A validation failure bound to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: FieldName,
    code: FieldErrorCode,
    message: String,
}

impl FieldError {
    fn new(field: FieldName, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn code(&self) -> FieldErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// First error recorded against `field`, if any.
pub fn error_for(errors: &[FieldError], field: FieldName) -> Option<&FieldError> {
    errors.iter().find(|error| error.field == field)
}

pub(crate) fn blank_field_error(field: FieldName, message: &str) -> FieldError {
    FieldError::new(field, FieldErrorCode::Blank, message)
}

pub(crate) fn not_an_integer_error(field: FieldName, label: &str) -> FieldError {
    FieldError::new(
        field,
        FieldErrorCode::NotAnInteger,
        format!("{label} must be a whole number"),
    )
}

/// Parse an optional integer field. Missing or blank input means "not set".
pub(crate) fn parse_optional_i32(
    value: Option<&str>,
    field: FieldName,
    label: &str,
) -> Result<Option<i32>, FieldError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| not_an_integer_error(field, label)),
    }
}
