//! Core types for Swagger document lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key under a path item holding parameters shared by all methods.
///
/// Never a method name; the matcher skips it during method search.
pub const PARAMETERS_KEY: &str = "parameters";

/// Prefix of a same-document definition reference.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Scheme preferred by [`Api::domain`] when present anywhere in `schemes`.
pub const SECURE_SCHEME: &str = "https";

/// Operation keys Swagger 2.0 allows under a path item.
pub const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

/// A decoded Swagger 2.0 document.
///
/// Holds the parts of the document this crate reads: the host and scheme
/// list for [`Api::domain`], the path templates with their per-method
/// payloads for [`Api::search`], and the named definitions for
/// [`Api::examples`].
///
/// Per-method payloads under `paths` stay undecoded [`Value`]s; the matcher
/// decodes the one it needs on each query. The document is immutable after
/// construction, so any number of threads may query it concurrently.
#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub schemes: Vec<String>,

    /// Path template -> raw per-method object.
    ///
    /// Iteration follows document declaration order (`preserve_order`), so
    /// when two templates mask to the same shape the one declared first wins.
    #[serde(default)]
    pub paths: Map<String, Value>,

    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,
}

/// A named schema definition, reduced to the one field lookup cares about.
///
/// All other schema fields are ignored at decode time. An empty `example`
/// means the definition carries no example payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub example: String,
}

/// One operation, decoded on demand from a path's raw per-method payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMethod {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A single operation parameter. Only the schema reference is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

/// A parameter schema holding a `$ref` to a named definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref", default)]
    pub reference: String,
}

impl SchemaRef {
    /// Returns the definitions-map key this reference points at.
    ///
    /// Strips the `#/definitions/` prefix. A reference without the prefix is
    /// returned verbatim and looked up as-is.
    pub fn definition_name(&self) -> &str {
        self.reference
            .strip_prefix(DEFINITIONS_PREFIX)
            .unwrap_or(&self.reference)
    }
}
