//! create-backend-project generates a starter Node.js backend from a short
//! question-and-answer session: folder tree, source files and config files.

/// Application flow tying answers, folders and materialization together
pub mod app;

/// Template catalog mapping each generated file to its generator
pub mod catalog;

/// Command-line interface
pub mod cli;

/// Project configuration built from the user's answers
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Filesystem access, real or dry run
pub mod filesystem;

/// Folder resolution and the folder to file table
pub mod folders;

/// Pretty-printing of generated content
pub mod formatter;

/// Logger setup
pub mod logger;

/// Writes the project to disk and reports every entry
pub mod materializer;

/// Preloaded answers and the question sequence
pub mod parser;

/// User interaction
pub mod prompt;

/// Template rendering through MiniJinja
pub mod renderer;
