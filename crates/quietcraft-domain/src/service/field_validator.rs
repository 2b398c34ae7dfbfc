//! Real-time form field validation

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::phone::is_valid_phone;
use crate::model::{FieldKind, FormField};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PHONE: &str = "Please enter a valid phone number";
pub const MSG_DATE_PAST: &str = "Event date must be in the future";
pub const MSG_DATE_FORMAT: &str = "Please enter a valid date";

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldValidation {
    /// Optional field left empty; no state shown
    Skipped,
    Valid,
    Invalid(&'static str),
}

impl FieldValidation {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldValidation::Invalid(msg) => Some(*msg),
            _ => None,
        }
    }
}

/// Validate `field` against its kind. Dates are compared with `today`.
pub fn validate_field(field: &FormField, today: NaiveDate) -> FieldValidation {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required {
            FieldValidation::Invalid(MSG_REQUIRED)
        } else {
            FieldValidation::Skipped
        };
    }

    let error = match field.kind {
        FieldKind::Email if !EMAIL.is_match(value) => Some(MSG_EMAIL),
        FieldKind::Tel if !is_valid_phone(value) => Some(MSG_PHONE),
        FieldKind::Date => validate_event_date(value, today),
        _ => None,
    };

    match error {
        Some(msg) => FieldValidation::Invalid(msg),
        None => FieldValidation::Valid,
    }
}

fn validate_event_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) if date < today => Some(MSG_DATE_PAST),
        Ok(_) => None,
        Err(_) => Some(MSG_DATE_FORMAT),
    }
}

/// Validate every field, returning the name and message of each failure
pub fn validate_form(fields: &[FormField], today: NaiveDate) -> Vec<(String, &'static str)> {
    fields
        .iter()
        .filter_map(|field| {
            validate_field(field, today)
                .message()
                .map(|msg| (field.name.clone(), msg))
        })
        .collect()
}
