use std::collections::BTreeMap;

use crate::types::DbId;

/// Field name mapped to the messages describing what is wrong with it.
///
/// A `BTreeMap` keeps the serialized error body stable across requests.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),
}

impl CoreError {
    /// Build a [`CoreError::Validation`] carrying a single field message.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        CoreError::Validation(errors)
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors.keys().cloned().collect::<Vec<_>>().join(", ")
}
