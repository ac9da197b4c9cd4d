//! Services module
//!
//! Business logic services that coordinate between handlers and repository.

pub mod todos;

pub use todos::TodosService;
