//! Recursive traversal of a remote file tree
//!
//! Walks a remote directory depth-first through a `FileSource`, mirroring
//! its layout under the local download root. Entries whose remote path
//! contains the omit substring are skipped. A failed file fetch is recorded
//! and the walk continues; only filesystem errors on the local side abort.
//!
//! Traversal is deliberately sequential. This tool mirrors trees that are
//! small by download-tool standards (application droplets, log directories),
//! and ordering the writes the way the listing reports them keeps the
//! failure report deterministic.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::{debug, warn};

use crate::app::client::{DirEntry, FileSource};
use crate::errors::DownloadResult;

/// Counters and failure records for one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadStats {
    /// Files fetched and written locally
    pub files_written: u64,
    /// Local directories created
    pub directories_created: u64,
    /// Entries skipped by the omit filter
    pub entries_skipped: u64,
    /// Remote paths that failed to download, with the error text
    pub failures: Vec<(String, String)>,
}

impl DownloadStats {
    fn merge(&mut self, other: DownloadStats) {
        self.files_written += other.files_written;
        self.directories_created += other.directories_created;
        self.entries_skipped += other.entries_skipped;
        self.failures.extend(other.failures);
    }
}

/// Traversal event sink
///
/// The CLI layer renders these as a spinner or per-file lines; the walker
/// itself stays free of terminal concerns.
pub trait WalkObserver {
    /// A remote directory is about to be entered
    fn on_directory(&self, remote_path: &str);
    /// A file was fetched and written
    fn on_file(&self, remote_path: &str);
    /// An entry was skipped by the omit filter
    fn on_skip(&self, remote_path: &str);
    /// A file fetch failed and was recorded
    fn on_failure(&self, remote_path: &str, error: &str);
}

/// Observer that discards all events
pub struct NullObserver;

impl WalkObserver for NullObserver {
    fn on_directory(&self, _remote_path: &str) {}
    fn on_file(&self, _remote_path: &str) {}
    fn on_skip(&self, _remote_path: &str) {}
    fn on_failure(&self, _remote_path: &str, _error: &str) {}
}

/// Depth-first downloader over a `FileSource`
pub struct Walker<'a, S: FileSource> {
    source: &'a S,
    omit: &'a str,
    observer: &'a dyn WalkObserver,
}

impl<'a, S: FileSource> Walker<'a, S> {
    /// Creates a walker over `source`
    ///
    /// An empty `omit` disables the exclusion filter.
    pub fn new(source: &'a S, omit: &'a str, observer: &'a dyn WalkObserver) -> Self {
        Self {
            source,
            omit,
            observer,
        }
    }

    /// Download the tree rooted at `starting_path` into `download_root`
    ///
    /// `starting_path` is slash-delimited and slash-terminated;
    /// `download_root` must already exist.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` on local filesystem failures or when the
    /// starting directory itself cannot be listed. Per-file fetch failures
    /// are recorded in the returned stats instead.
    pub async fn run(
        &self,
        starting_path: &str,
        download_root: &Path,
    ) -> DownloadResult<DownloadStats> {
        self.walk(starting_path.to_string(), download_root.to_path_buf())
            .await
    }

    /// Recursive step: one remote directory
    ///
    /// Boxed future because the recursion depth follows the remote tree.
    fn walk(
        &self,
        remote_dir: String,
        local_dir: PathBuf,
    ) -> Pin<Box<dyn Future<Output = DownloadResult<DownloadStats>> + '_>> {
        Box::pin(async move {
            let mut stats = DownloadStats::default();

            self.observer.on_directory(&remote_dir);
            let entries = match self.source.list_directory(&remote_dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    // An unlistable subdirectory is recorded like a failed
                    // file; the rest of the tree still downloads.
                    warn!("Failed to list {}: {}", remote_dir, e);
                    self.observer.on_failure(&remote_dir, &e.to_string());
                    stats.failures.push((remote_dir, e.to_string()));
                    return Ok(stats);
                }
            };

            for entry in entries {
                let remote_path = entry.remote_path(&remote_dir);

                if self.is_omitted(&remote_path) {
                    debug!("Omitting {}", remote_path);
                    self.observer.on_skip(&remote_path);
                    stats.entries_skipped += 1;
                    continue;
                }

                if entry.is_dir {
                    let child_local = local_dir.join(&entry.name);
                    tokio::fs::create_dir_all(&child_local).await?;
                    stats.directories_created += 1;

                    let child_remote = format!("{}/", remote_path);
                    let child_stats = self.walk(child_remote, child_local).await?;
                    stats.merge(child_stats);
                } else {
                    self.download_entry(&entry, &remote_path, &local_dir, &mut stats)
                        .await?;
                }
            }

            Ok(stats)
        })
    }

    /// Fetch one file and write it under `local_dir`
    async fn download_entry(
        &self,
        entry: &DirEntry,
        remote_path: &str,
        local_dir: &Path,
        stats: &mut DownloadStats,
    ) -> DownloadResult<()> {
        match self.source.fetch_file(remote_path).await {
            Ok(bytes) => {
                let local_path = local_dir.join(&entry.name);
                tokio::fs::write(&local_path, &bytes).await?;
                debug!("Wrote {} ({} bytes)", local_path.display(), bytes.len());
                self.observer.on_file(remote_path);
                stats.files_written += 1;
            }
            Err(e) => {
                warn!("Failed to download {}: {}", remote_path, e);
                self.observer.on_failure(remote_path, &e.to_string());
                stats.failures.push((remote_path.to_string(), e.to_string()));
            }
        }
        Ok(())
    }

    fn is_omitted(&self, remote_path: &str) -> bool {
        !self.omit.is_empty() && remote_path.contains(self.omit)
    }
}
