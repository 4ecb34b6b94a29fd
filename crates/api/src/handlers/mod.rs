//! Axum handlers, one module per resource.
//!
//! Every handler follows the same order: path ids must exist (404), then the
//! payload and the ids it references are validated (422), then the
//! repository call runs.

pub mod board;
pub mod card;
pub mod references;
pub mod task;
