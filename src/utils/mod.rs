//! Utility modules for common functionality
//!
//! Provides reusable helpers for file operations and text normalization.

pub mod fs;
pub mod text;

pub use fs::FileSystemUtils;
pub use text::title_case;
