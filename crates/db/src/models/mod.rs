//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO for patches
//!
//! Required DTO fields are `Option` so a missing field surfaces as a
//! per-field validation message instead of a body deserialization failure.
//! Optional update fields are `Option<Option<T>>` (see [`explicit_null`]):
//! `None` leaves the column alone, `Some(None)` is an explicit `null`.

use kanban_core::error::FieldErrors;
use kanban_core::validation::field_errors;
use serde::{Deserialize, Deserializer};
use validator::Validate;

pub mod board;
pub mod card;
pub mod task;

/// Deserialize an optional field so that an explicit `null` stays distinct
/// from an absent key. Use together with `#[serde(default)]`.
pub fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Whether a double-option field was sent as `null`.
pub fn is_null<T>(field: &Option<Option<T>>) -> bool {
    matches!(field, Some(None))
}

/// Inner value of a double-option field, if one was sent.
pub fn present<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}

/// Public JSON name of a DTO field. Validation output is keyed by the
/// Rust field name, clients know the serde-renamed one.
pub fn json_field_name(field: &str) -> &str {
    match field {
        "num_cards" => "numCards",
        "sort_order" => "order",
        "task_name" => "taskName",
        "start_date" => "startDate",
        "end_date" => "endDate",
        other => other,
    }
}

/// A request body that can be checked without touching the database.
pub trait Payload: Validate {
    /// Non-nullable fields that were sent as an explicit `null`.
    fn null_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Run the derive rules and the null checks, keyed by JSON field name.
    fn field_errors(&self) -> FieldErrors {
        let mut errors: FieldErrors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e)
                .into_iter()
                .map(|(field, messages)| (json_field_name(&field).to_string(), messages))
                .collect(),
        };
        for field in self.null_fields() {
            errors
                .entry(field.to_string())
                .or_default()
                .push(format!("The {field} field is required."));
        }
        errors
    }
}

/// Collect the names whose flag is set.
fn nulls<const N: usize>(fields: [(&'static str, bool); N]) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter_map(|(field, null)| null.then_some(field))
        .collect()
}
