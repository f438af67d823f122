//! Example extraction - collects example bodies for a matched operation.

use crate::error::ExampleError;
use crate::types::Api;

impl Api {
    /// Returns the example bodies attached to the operation at
    /// `method`/`request_uri`.
    ///
    /// Finds the operation via [`Api::search`], then walks its parameters in
    /// declared order: parameters without a schema are skipped, each schema
    /// reference is resolved against `definitions`, and every resolved
    /// definition contributes its `example` string. Presence of the
    /// definition is what counts - a definition with an unset example still
    /// contributes an empty string.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`](crate::SearchError) from the lookup
    /// unchanged, or returns [`ExampleError::NotFound`] when no parameter
    /// resolved to a present definition.
    pub fn examples(&self, method: &str, request_uri: &str) -> Result<Vec<String>, ExampleError> {
        let operation = self.search(method, request_uri)?;

        let mut bodies = Vec::new();
        for parameter in &operation.parameters {
            let Some(schema) = &parameter.schema else {
                continue;
            };
            let Some(definition) = self.definitions.get(schema.definition_name()) else {
                continue;
            };
            bodies.push(definition.example.clone());
        }

        if bodies.is_empty() {
            return Err(ExampleError::NotFound {
                method: method.to_string(),
                uri: request_uri.to_string(),
            });
        }
        Ok(bodies)
    }
}
