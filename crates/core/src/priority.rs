//! Task priority values.
//!
//! Priorities are stored as plain text; the accepted set is enforced here and
//! by a `CHECK` constraint on `tasks.priority`.

/// Highest priority.
pub const PRIORITY_HIGH: &str = "Alta";

/// Default working priority.
pub const PRIORITY_MEDIUM: &str = "Media";

/// Lowest priority.
pub const PRIORITY_LOW: &str = "Baja";

/// All valid priority values, highest first.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_HIGH, PRIORITY_MEDIUM, PRIORITY_LOW];

/// Validate that a priority string is one of the accepted values.
pub fn validate_priority(priority: &str) -> Result<(), String> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        ))
    }
}
