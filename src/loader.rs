//! Document loading from various sources.
//!
//! Handles loading Swagger documents from files, strings, already-decoded
//! JSON values, and HTTP URLs. The lookup core itself only ever sees a
//! decoded [`Api`]; these helpers exist for the CLI and for callers that
//! don't want to wire up serde themselves.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::types::Api;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't a valid document.
pub fn load_api(path: &Path) -> Result<Api, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    load_api_str(&content)
}

/// Load a document from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't a valid document.
pub fn load_api_str(content: &str) -> Result<Api, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Build an [`Api`] from an already-decoded JSON value.
///
/// This is the constructor for callers whose environment decoded the
/// document for them.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the value doesn't have the expected
/// document shape.
pub fn load_api_value(value: Value) -> Result<Api, LoadError> {
    serde_json::from_value(value).map_err(|source| LoadError::InvalidJson { source })
}

/// Load a document from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `LoadError::Network` if the request fails,
/// or `LoadError::InvalidJson` if the response isn't a valid document.
#[cfg(feature = "remote")]
pub fn load_api_url(url: &str) -> Result<Api, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| LoadError::Network {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|source| LoadError::Network {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| LoadError::Network {
            url: url.to_string(),
            source,
        })?;

    response.json().map_err(|source| LoadError::Network {
        url: url.to_string(),
        source,
    })
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a document from a file path or URL.
///
/// Automatically detects whether the source is a URL or file path.
/// URL loading requires the `remote` feature.
///
/// # Errors
///
/// Returns appropriate errors based on the source type.
pub fn load_api_auto(source: &str) -> Result<Api, LoadError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_api_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(LoadError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_api(Path::new(source))
    }
}
