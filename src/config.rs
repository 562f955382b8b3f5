//! Configuration management for the record manager
//!
//! Centralizes configuration options and provides validation.

use crate::{
    cli::{args::DEFAULT_DATA_FILE, Args},
    error::RecordsError,
    utils::fs::FileSystemUtils,
};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// JSON file holding the student collection
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, RecordsError> {
        let config = Self {
            debug: args.debug,
            data_file: args.data_file.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), RecordsError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(RecordsError::config("Data file path must not be empty"));
        }

        if FileSystemUtils::new().is_dir(&self.data_file) {
            return Err(RecordsError::config(format!(
                "Data file is a directory: {}",
                self.data_file.display()
            )));
        }

        Ok(())
    }
}
