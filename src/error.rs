//! Error handling for the scaffolder.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can abort a scaffolding run or fail a single entry of it.
///
/// Existing files and folders are not errors: they are reported as skips by the
/// materializer. Only the project root conflict is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents JSON parsing or serialization failures
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents failures of the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents invalid answers or unsupported option values
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The project root folder is already taken
    #[error("Folder '{project_dir}' already exists. Please choose a different name.")]
    ProjectExistsError { project_dir: String },

    /// The run finished but some entries could not be written
    #[error("{failed} of {total} entries could not be created.")]
    IncompleteError { failed: usize, total: usize },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Every aborted or incomplete run exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
