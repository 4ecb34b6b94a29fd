//! Field-validation helpers shared by the request DTOs.
//!
//! DTOs derive [`validator::Validate`]; the functions here are the custom
//! rules those derives reference plus the conversion of
//! [`ValidationErrors`] into the `field -> [message]` map returned to
//! clients.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::deadline;
use crate::error::FieldErrors;
use crate::priority;
use crate::types::Date;

/// Flatten derive-validation output into a [`FieldErrors`] map.
///
/// Each message falls back to the rule code when the rule carries no
/// explicit message.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field is invalid ({}).", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// `custom` rule: the value must be one of the task priorities.
pub fn valid_priority(value: &str) -> Result<(), ValidationError> {
    priority::validate_priority(value).map_err(|msg| {
        ValidationError::new("priority").with_message(Cow::Owned(msg))
    })
}

/// `custom` rule: the date must be today or later (UTC).
pub fn today_or_later(date: &Date) -> Result<(), ValidationError> {
    not_before(*date, deadline::today())
}

/// The date must not fall before `today`.
pub fn not_before(date: Date, today: Date) -> Result<(), ValidationError> {
    if date >= today {
        Ok(())
    } else {
        Err(ValidationError::new("after_or_equal").with_message(Cow::Owned(format!(
            "The date must be a date after or equal to today ({today})."
        ))))
    }
}

/// `custom` rule: the string must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("The field must not be blank.")))
    } else {
        Ok(())
    }
}
