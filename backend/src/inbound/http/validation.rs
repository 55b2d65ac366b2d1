//! Validation helpers shared by the user handlers.
//!
//! Failures carry `{"field": ..., "code": ...}` details so clients can point
//! at the offending input.

use serde_json::json;

use crate::domain::{Error, UserName, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankField => "blank_field",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const ID: FieldName = FieldName::new("id");

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::BlankField,
        format!("{name} must not be blank"),
    )
}

/// A path id that is not an integer at all.
pub(crate) fn invalid_id_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::InvalidId,
        format!("{name} must be an integer"),
    )
}

/// Require a present, non-blank user name.
pub(crate) fn parse_user_name(value: Option<String>) -> Result<UserName, Error> {
    let raw = value.ok_or_else(|| missing_field_error(NAME))?;
    UserName::new(raw).map_err(|err| match err {
        UserValidationError::EmptyName => blank_field_error(NAME),
        other => Error::invalid_request(other.to_string()),
    })
}
