//! Command-line interface components
//!
//! This module contains CLI-specific code: the flag grammar, directory
//! context resolution, the download command handler, and progress display.

pub mod commands;
pub mod context;
pub mod flags;
pub mod progress;

#[cfg(test)]
mod tests;

pub use commands::{handle_download, validate_app_name};
pub use context::{normalize_path, DirectoryContext};
pub use flags::{parse_flags, FlagVals};
pub use progress::ProgressReporter;
