//! Core functionality for managing student records
//!
//! Contains the record type, the JSON file store, and the registry that
//! owns the collection during a session.

pub mod registry;
pub mod store;
pub mod student;

pub use registry::StudentRegistry;
pub use store::{LoadOutcome, StudentStore};
pub use student::{Student, StudentUpdate};
