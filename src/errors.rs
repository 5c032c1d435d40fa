//! Error types for apptree_fetcher
//!
//! This module defines error types for all components of the application.
//! Errors are designed to be actionable: the messages for flag and
//! validation failures are part of the CLI contract and are asserted by
//! the test suite.

use thiserror::Error;

/// Flag parsing errors
///
/// The messages mirror the grammar users see on the command line: an
/// unknown flag reports the token exactly as it was typed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlagError {
    /// Unrecognized flag token
    #[error("flag provided but not defined: {token}")]
    NotDefined { token: String },

    /// A value-taking flag appeared without a value
    #[error("flag needs an argument: {token}")]
    MissingValue { token: String },

    /// A flag value failed validation (instance must be an integer)
    #[error("invalid value {value:?} for flag -{flag}: parse error")]
    InvalidValue { flag: String, value: String },
}

/// Directory-context resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// No app name was supplied
    #[error("Missing App Name")]
    MissingAppName,

    /// The app name slot holds a flag token
    #[error("App name begins with '-' or '--'. correct flag usage: 'apptree_fetcher APP_NAME [--flags]'")]
    AppNameIsFlag,
}

/// Platform files-API errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be constructed
    #[error("Invalid API URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },

    /// Remote path does not exist on the instance
    #[error("Remote path not found: {path}")]
    PathNotFound { path: String },

    /// Server returned a non-success status
    #[error("Server error: HTTP {status} for {path}")]
    ServerError { status: u16, path: String },

    /// Directory listing line could not be parsed
    #[error("Unparseable listing line: {line:?}")]
    InvalidListing { line: String },
}

/// Local download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Target directory exists and holds files, and --overwrite was not given
    #[error("{path} already Exists and is not an empty directory. Use --overwrite to replace its contents")]
    TargetExists { path: String },

    /// I/O error during directory creation or file writes
    #[error("File I/O error")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file exists but cannot be read
    #[error("Configuration file not readable: {path}")]
    NotReadable { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// No API endpoint available from file or environment
    #[error("Missing API endpoint. Set {var} or add 'api_url' to the configuration file")]
    MissingApiUrl { var: &'static str },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Flag parsing error
    #[error(transparent)]
    Flag(#[from] FlagError),

    /// Directory-context error
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Files-API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Download error
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Flag(_) => "flags",
            AppError::Context(_) => "context",
            AppError::Api(_) => "api",
            AppError::Download(_) => "download",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
        }
    }

    /// Check whether the error stems from bad command-line usage
    ///
    /// Usage errors get the one-line usage hint appended by `main`.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Flag(_) | AppError::Context(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Flag parsing result type alias
pub type FlagResult<T> = std::result::Result<T, FlagError>;

/// Files-API result type alias
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Download result type alias
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_error_messages_match_contract() {
        let err = FlagError::NotDefined {
            token: "-ooverwrite".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "flag provided but not defined: -ooverwrite"
        );

        let err = FlagError::InvalidValue {
            flag: "i".to_string(),
            value: "hello".to_string(),
        };
        assert!(err
            .to_string()
            .starts_with("invalid value \"hello\" for flag -i"));
    }

    #[test]
    fn test_context_error_messages_match_contract() {
        assert_eq!(ContextError::MissingAppName.to_string(), "Missing App Name");
        assert!(ContextError::AppNameIsFlag
            .to_string()
            .contains("App name begins with '-' or '--'"));
    }

    #[test]
    fn test_target_exists_message() {
        let err = DownloadError::TargetExists {
            path: "/tmp/app-download/demo".to_string(),
        };
        assert!(err
            .to_string()
            .contains("already Exists and is not an empty directory"));
    }

    #[test]
    fn test_error_categories() {
        let err: AppError = ContextError::MissingAppName.into();
        assert_eq!(err.category(), "context");
        assert!(err.is_usage());

        let err: AppError = DownloadError::TargetExists {
            path: "x".to_string(),
        }
        .into();
        assert_eq!(err.category(), "download");
        assert!(!err.is_usage());
    }
}
