//! Directory-listing parsing for the platform files API
//!
//! A directory request returns a plain-text listing, one entry per line:
//! the entry name, whitespace, then a size column. Directory names carry a
//! trailing slash and a `-` in the size column. An empty body (or the
//! platform's "No files found" marker) is an empty directory.
//!
//! ```text
//! app/                                     -
//! logs/                                    -
//! staging_info.yml                       221B
//! ```

use crate::constants::api::EMPTY_LISTING_MARKER;
use crate::errors::{ApiError, ApiResult};

/// One entry of a remote directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name without any trailing slash
    pub name: String,
    /// Whether the entry is a subdirectory
    pub is_dir: bool,
    /// Raw size column as reported by the platform (`-` for directories)
    pub size: String,
}

impl DirEntry {
    /// Remote path of this entry under `parent`, slash-delimited
    ///
    /// `parent` is expected to end with a slash (starting paths always do).
    pub fn remote_path(&self, parent: &str) -> String {
        format!("{}{}", parent, self.name)
    }
}

/// Parse a directory listing body into entries
///
/// # Errors
///
/// Returns `ApiError::InvalidListing` for a non-empty line with no size
/// column, which indicates the endpoint did not return a listing at all.
pub fn parse_listing(body: &str) -> ApiResult<Vec<DirEntry>> {
    if body.trim().is_empty() || body.contains(EMPTY_LISTING_MARKER) {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(line)?);
    }
    Ok(entries)
}

/// Parse a single listing line into an entry
///
/// The size column never contains whitespace, so the split point is the
/// last whitespace run. Names may contain interior spaces.
fn parse_line(line: &str) -> ApiResult<DirEntry> {
    let trimmed = line.trim_end();
    let (raw_name, size) = trimmed
        .rsplit_once(|c: char| c.is_whitespace())
        .map(|(name, size)| (name.trim_end(), size))
        .ok_or_else(|| ApiError::InvalidListing {
            line: line.to_string(),
        })?;

    if raw_name.is_empty() {
        return Err(ApiError::InvalidListing {
            line: line.to_string(),
        });
    }

    let is_dir = raw_name.ends_with('/');
    Ok(DirEntry {
        name: raw_name.trim_end_matches('/').to_string(),
        is_dir,
        size: size.to_string(),
    })
}
