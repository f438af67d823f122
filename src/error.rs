//! Error types for Swagger document loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while getting a document into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors during operation search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The matched raw payload did not decode into an operation shape.
    /// Aborts the search; never swallowed or retried.
    #[error("cannot decode operation: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// No path template matched the request, or no method matched within a
    /// matched template.
    #[error("not found: {method} {uri}")]
    NotFound { method: String, uri: String },
}

/// Errors during example extraction.
#[derive(Debug, Error)]
pub enum ExampleError {
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The operation exists but none of its parameters resolved to a
    /// definition present in the document.
    #[error("example not found: {method} {uri}")]
    NotFound { method: String, uri: String },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::Read { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::Network { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}

impl SearchError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::Decode { .. } => 2,
            SearchError::NotFound { .. } => 1,
        }
    }
}

impl ExampleError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExampleError::Search(e) => e.exit_code(),
            ExampleError::NotFound { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_exit_codes() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("swagger.json"),
        };
        assert_eq!(err.exit_code(), 3);

        let err = LoadError::InvalidJson {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn search_error_exit_codes() {
        let err = SearchError::NotFound {
            method: "GET".into(),
            uri: "/pets/42".into(),
        };
        assert_eq!(err.exit_code(), 1);

        let err = SearchError::Decode {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn example_error_delegates_search_exit_code() {
        let err = ExampleError::Search(SearchError::NotFound {
            method: "GET".into(),
            uri: "/pets/42".into(),
        });
        assert_eq!(err.exit_code(), 1);

        let err = ExampleError::NotFound {
            method: "GET".into(),
            uri: "/pets/42".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn search_error_display() {
        let err = SearchError::NotFound {
            method: "POST".into(),
            uri: "/pets".into(),
        };
        assert_eq!(err.to_string(), "not found: POST /pets");
    }

    #[test]
    fn example_error_display() {
        let err = ExampleError::NotFound {
            method: "GET".into(),
            uri: "/pets/42".into(),
        };
        assert_eq!(err.to_string(), "example not found: GET /pets/42");
    }
}
