//! Request extractors shared by the handlers.
//!
//! - [`json::JsonBody`] -- JSON body extractor whose rejections use the API error format.
//! - [`path::PathParam`] -- path extractor whose rejections use the API error format.

pub mod json;
pub mod path;
