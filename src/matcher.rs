//! Path matching - resolves a method and concrete request path to an
//! operation in the document.
//!
//! Matching is purely structural: variable segments in a path template
//! (`/pets/{id}`) and the concrete values in a request path (`/pets/42`)
//! both mask to a wildcard token, and the masked strings are compared for
//! exact equality. No routing engine, no regex.

use serde_json::Value;

use crate::error::SearchError;
use crate::types::{Api, PathMethod, PARAMETERS_KEY};

/// Wildcard token variable segments mask to.
const WILDCARD: &str = "*";

impl Api {
    /// Finds the operation registered for `method` at `request_uri`.
    ///
    /// The first path template whose masked form equals the masked request
    /// path is scanned for a case-insensitive method match, skipping the
    /// reserved `parameters` key. The matched raw payload is decoded into a
    /// fresh [`PathMethod`] on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Decode`] if the matched payload does not
    /// decode, or [`SearchError::NotFound`] if no template or method
    /// matches.
    pub fn search(&self, method: &str, request_uri: &str) -> Result<PathMethod, SearchError> {
        let masked_uri = mask_variables(request_uri);

        for (template, item) in &self.paths {
            if mask_variables(template) != masked_uri {
                continue;
            }
            let Some(methods) = item.as_object() else {
                continue;
            };
            if let Some(raw) = find_method(methods, method) {
                return decode_operation(raw);
            }
        }

        Err(SearchError::NotFound {
            method: method.to_string(),
            uri: request_uri.to_string(),
        })
    }
}

/// Replace every `{...}`-wrapped segment with the wildcard token.
///
/// Works segment by segment on `/`-separated paths; literal segments pass
/// through untouched. Both templates and concrete request paths go through
/// this, which is what makes `/pets/{id}` and `/pets/42` compare equal.
pub(crate) fn mask_variables(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if is_variable(segment) {
                WILDCARD
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// A segment is a variable placeholder when wrapped in brace delimiters.
fn is_variable(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// Scan a path item for `method`, case-insensitively, skipping the
/// reserved `parameters` key. First hit wins.
fn find_method<'a>(
    methods: &'a serde_json::Map<String, Value>,
    method: &str,
) -> Option<&'a Value> {
    for (name, raw) in methods {
        if name == PARAMETERS_KEY {
            continue;
        }
        if name.eq_ignore_ascii_case(method) {
            return Some(raw);
        }
    }
    None
}

fn decode_operation(raw: &Value) -> Result<PathMethod, SearchError> {
    serde_json::from_value(raw.clone()).map_err(|source| SearchError::Decode { source })
}
