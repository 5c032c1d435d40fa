//! Application constants for apptree_fetcher
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// Environment variable names for platform access
pub mod env {
    /// Environment variable holding the platform API base URL
    pub const API_URL: &str = "APPTREE_API_URL";

    /// Environment variable holding the platform bearer token
    pub const API_TOKEN: &str = "APPTREE_API_TOKEN";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "apptree-fetcher/0.1.0";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 4;
}

/// Platform files-API endpoints
pub mod api {
    /// Path template for the files endpoint, relative to the API base URL.
    /// `{app}`, `{instance}` and `{path}` are substituted at request time.
    pub const FILES_ENDPOINT: &str = "/v2/apps/{app}/instances/{instance}/files{path}";

    /// Listing body the platform returns for an empty directory
    pub const EMPTY_LISTING_MARKER: &str = "No files found";
}

/// File and directory naming constants
pub mod files {
    /// Name of the top-level directory all downloads land under
    pub const DOWNLOAD_DIR_NAME: &str = "app-download";

    /// Name of the failed-download report written into the download root
    pub const FAILED_LIST_FILE: &str = "files-failed-to-download.txt";
}

/// Flag grammar constants
pub mod flags {
    /// Default instance index when --i/--instance is not given
    pub const DEFAULT_INSTANCE: &str = "0";
}

/// Configuration file constants
pub mod config {
    /// Directory under the platform config dir holding our settings file
    pub const CONFIG_DIR_NAME: &str = "apptree_fetcher";

    /// Settings file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}

// Re-export commonly used constants for convenience
pub use api::FILES_ENDPOINT;
pub use env::{API_TOKEN as ENV_API_TOKEN, API_URL as ENV_API_URL};
pub use files::{DOWNLOAD_DIR_NAME, FAILED_LIST_FILE};
pub use flags::DEFAULT_INSTANCE;
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
