//! HTTP client for the platform files API
//!
//! The platform exposes an application's file tree through
//! `GET /v2/apps/{app}/instances/{instance}/files/{path}`: a directory
//! request returns a plain-text listing, a file request returns the raw
//! file bytes. This module provides the `FileSource` seam the traversal
//! runs against and the concrete HTTP adapter behind it.
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `listing`: directory-listing parsing

use reqwest::StatusCode;
use url::Url;

use crate::config::Settings;
use crate::constants::api::FILES_ENDPOINT;
use crate::errors::{ApiError, ApiResult};

// Module declarations
pub mod config;
pub mod listing;

pub use config::ClientConfig;
pub use listing::{parse_listing, DirEntry};

/// Read access to a remote application's file tree
///
/// The traversal only ever lists directories and fetches files, so this is
/// the whole seam; tests drive the walker with an in-memory source.
pub trait FileSource {
    /// List the entries of a remote directory
    ///
    /// `path` is slash-delimited and slash-terminated, e.g. `/app/src/`.
    fn list_directory(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = ApiResult<Vec<DirEntry>>> + Send;

    /// Fetch the bytes of a remote file
    fn fetch_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = ApiResult<Vec<u8>>> + Send;
}

/// HTTP adapter for one application instance's file tree
///
/// Holds the app name and instance index so the traversal only deals in
/// remote paths.
#[derive(Debug)]
pub struct FilesClient {
    client: reqwest::Client,
    api_url: Url,
    api_token: Option<String>,
    app_name: String,
    instance: String,
}

impl FilesClient {
    /// Creates a client for the given app and instance from settings
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the configured API URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(settings: &Settings, app_name: &str, instance: &str) -> ApiResult<Self> {
        Self::with_config(settings, app_name, instance, ClientConfig::default())
    }

    /// Creates a client with custom HTTP configuration
    pub fn with_config(
        settings: &Settings,
        app_name: &str,
        instance: &str,
        config: ClientConfig,
    ) -> ApiResult<Self> {
        let api_url = Url::parse(&settings.api_url).map_err(|e| ApiError::InvalidUrl {
            url: settings.api_url.clone(),
            error: e.to_string(),
        })?;
        let client = config.build_http_client()?;

        tracing::debug!("Created files client for app '{}' against {}", app_name, api_url);

        Ok(Self {
            client,
            api_url,
            api_token: settings.api_token.clone(),
            app_name: app_name.to_string(),
            instance: instance.to_string(),
        })
    }

    /// Build the files-endpoint URL for a remote path
    fn files_url(&self, remote_path: &str) -> ApiResult<Url> {
        let endpoint = FILES_ENDPOINT
            .replace("{app}", &self.app_name)
            .replace("{instance}", &self.instance)
            .replace("{path}", remote_path);
        let raw = format!("{}{}", self.api_url.as_str().trim_end_matches('/'), endpoint);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            error: e.to_string(),
        })
    }

    /// Issue a GET against the files endpoint and map error statuses
    async fn get(&self, remote_path: &str) -> ApiResult<reqwest::Response> {
        let url = self.files_url(remote_path)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::PathNotFound {
                path: remote_path.to_string(),
            }),
            status if !status.is_success() => Err(ApiError::ServerError {
                status: status.as_u16(),
                path: remote_path.to_string(),
            }),
            _ => {
                tracing::debug!("Fetched remote path: {}", remote_path);
                Ok(response)
            }
        }
    }
}

impl FileSource for FilesClient {
    async fn list_directory(&self, path: &str) -> ApiResult<Vec<DirEntry>> {
        let body = self.get(path).await?.text().await?;
        parse_listing(&body)
    }

    async fn fetch_file(&self, path: &str) -> ApiResult<Vec<u8>> {
        let bytes = self.get(path).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
