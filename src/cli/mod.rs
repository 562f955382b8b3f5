//! Command-line interface module
//!
//! Provides argument parsing, the interactive menu, and output formatting.

pub mod args;
pub mod menu;
pub mod render;

pub use args::{parse_args, Args};
pub use menu::{run, Menu, MenuChoice};
