//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Default location of the data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// Student Records - an interactive manager for student records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "students")]
pub struct Args {
    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// JSON file holding the student records
    #[arg(long = "data-file", value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
