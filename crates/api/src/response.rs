//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "message": ..., "data": T }` envelope for mutations whose success
/// message distinguishes them from a plain update (moves, full task edits).
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
