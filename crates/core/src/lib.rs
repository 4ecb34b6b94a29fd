//! Domain building blocks for the Kanban board API.
//!
//! Everything here is free of database and HTTP dependencies so the rules
//! can be unit tested in isolation and shared by the `db` and `api` crates.

pub mod deadline;
pub mod error;
pub mod priority;
pub mod types;
pub mod validation;
