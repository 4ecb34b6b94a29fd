//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod board_repo;
pub mod card_repo;
pub mod task_repo;

pub use board_repo::BoardRepo;
pub use card_repo::CardRepo;
pub use task_repo::TaskRepo;
