//! apptree_fetcher library
//!
//! Recursively downloads a remote application's file tree to the local
//! filesystem, preserving directory structure, with overwrite, instance
//! selection, verbosity, and path-exclusion options.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
