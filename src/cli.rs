//! Command-line interface implementation.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "create-backend-project",
    author,
    version,
    about = "Quick setup for Node.js backend projects",
    long_about = None
)]
pub struct Args {
    /// Project name; asked interactively when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory in which the project folder is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file with answers to skip the matching questions
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Read the answers JSON from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Print what would be created without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Create every custom folder name as given, duplicates included
    #[arg(long)]
    pub keep_duplicate_folders: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
