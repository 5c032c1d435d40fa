//! Directory-context resolution
//!
//! Translates the user-supplied app name and remote path into two canonical
//! locations: the local download root everything is written under, and the
//! remote path the traversal starts from. Users supply paths with any mix
//! of leading and trailing slashes; both outputs are normalized regardless.

use std::path::{Path, PathBuf};

use crate::constants::files::DOWNLOAD_DIR_NAME;

/// Canonical local and remote locations for a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContext {
    /// Local directory the tree is written under, OS-native separators:
    /// `<cwd>/app-download/<app>/<normalized-path>/`
    pub download_root: PathBuf,
    /// Remote path the traversal starts from, always slash-delimited and
    /// slash-terminated: `/<normalized-path>/`
    pub starting_path: String,
}

impl DirectoryContext {
    /// Resolve the download root and remote starting path
    ///
    /// `args[1]` is the app name and `args[2]` the optional remote path;
    /// a missing or flag-shaped `args[2]` means the traversal starts at the
    /// remote root. App-name validation happens before this is called.
    pub fn resolve(cwd: &Path, args: &[String]) -> Self {
        let app_name = args.get(1).map(String::as_str).unwrap_or_default();
        let path_arg = args
            .get(2)
            .map(String::as_str)
            .filter(|a| !a.is_empty() && !a.starts_with('-'))
            .unwrap_or_default();

        let normalized = normalize_path(path_arg);

        let mut download_root = cwd.join(DOWNLOAD_DIR_NAME).join(app_name);
        let starting_path = if normalized.is_empty() {
            "/".to_string()
        } else {
            for segment in normalized.split('/') {
                download_root.push(segment);
            }
            format!("/{}/", normalized)
        };

        Self {
            download_root,
            starting_path,
        }
    }
}

/// Strip all leading and trailing slashes from a user-supplied path
///
/// Interior slashes are preserved; they delimit the remote directory
/// segments.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}
