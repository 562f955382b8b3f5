//! # Student Records
//!
//! A single-user, interactive command-line manager for student records kept
//! in a local JSON file.
//!
//! ## Features
//!
//! - Add, list, search, update, and delete records from a numbered menu
//! - Input validated once at the prompt boundary into typed records
//! - Whole-file JSON persistence after every change
//! - Corrupt data files reported instead of silently discarded
//!
//! ## Example
//!
//! ```no_run
//! use student_records::core::{Student, StudentRegistry, StudentStore};
//!
//! let (mut registry, _outcome) = StudentRegistry::open(StudentStore::new("students.json"))?;
//! registry.add(Student::from_input("S1", "jane doe", "20", "cs")?)?;
//! println!("{} students", registry.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr so the interactive transcript on stdout stays clean
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
