//! Core application logic for apptree_fetcher
//!
//! This module contains the platform files client and the recursive
//! traversal that mirrors a remote application's file tree locally.

pub mod client;
pub mod walker;

// Re-export main public API
pub use client::{ClientConfig, DirEntry, FileSource, FilesClient};
pub use walker::{DownloadStats, NullObserver, WalkObserver, Walker};
