//! Swagger Probe
//!
//! Runtime lookup of Swagger 2.0 operations and example payloads.
//!
//! This library resolves an observed `METHOD URI` pair against a decoded
//! Swagger document and extracts the example bodies its schema definitions
//! carry, so a test harness can assert against the payloads the
//! specification promises.
//!
//! # Example
//!
//! ```
//! use swagger_probe::load_api_value;
//! use serde_json::json;
//!
//! let api = load_api_value(json!({
//!     "host": "petstore.example.com",
//!     "schemes": ["http", "https"],
//!     "paths": {
//!         "/pets/{id}": {
//!             "get": {
//!                 "parameters": [
//!                     { "schema": { "$ref": "#/definitions/Pet" } }
//!                 ]
//!             }
//!         }
//!     },
//!     "definitions": {
//!         "Pet": { "example": "{\"id\":1,\"name\":\"rex\"}" }
//!     }
//! })).unwrap();
//!
//! // https wins over http regardless of position
//! assert_eq!(api.domain(), "https://petstore.example.com");
//!
//! // concrete request paths match templated ones segment by segment
//! let operation = api.search("GET", "/pets/42").unwrap();
//! assert_eq!(operation.parameters.len(), 1);
//!
//! let bodies = api.examples("get", "/pets/42").unwrap();
//! assert_eq!(bodies, ["{\"id\":1,\"name\":\"rex\"}"]);
//! ```
//!
//! # Matching Rules
//!
//! | Request | Template | Match? |
//! |-----------------|------------------|--------|
//! | `/pets/42` | `/pets/{id}` | yes - variable segments mask to `*` |
//! | `/pets/42/toys` | `/pets/{id}` | no - segment counts differ |
//! | `/pets/mine` | `/pets/mine` | yes - literal equality |
//!
//! Methods compare case-insensitively. The reserved `parameters` key under a
//! path holds shared parameters and is never matched as a method. The
//! document is immutable once decoded; lookups are read-only and
//! thread-safe.

mod domain;
mod error;
mod extract;
mod linter;
mod loader;
mod matcher;
mod types;

pub use error::{ExampleError, LoadError, SearchError};
pub use linter::{lint, lint_file, Diagnostic, FileResult, FileStatus, LintResult, Severity};
pub use loader::{is_url, load_api, load_api_auto, load_api_str, load_api_value};
pub use types::{
    Api, Definition, Parameter, PathMethod, SchemaRef, DEFINITIONS_PREFIX, HTTP_METHODS,
    PARAMETERS_KEY, SECURE_SCHEME,
};

#[cfg(feature = "remote")]
pub use loader::load_api_url;
