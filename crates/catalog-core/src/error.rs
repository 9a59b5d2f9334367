use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Category tag carried by business-rule and validation error bodies
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Category tag for failures the handler layer could not classify
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Single-failure error body
///
/// Emitted when a request trips one business rule. All three fields are
/// non-empty by construction; the value is built once per failed request
/// and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable failure category (e.g. `INVALID_REQUEST`)
    pub status_code: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Route identifier of the offending request, without client address
    pub path: String,
}

impl ApiError {
    pub fn new(status_code: impl Into<String>, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status_code: status_code.into(),
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Multi-failure error body for structural validation failures
///
/// Same scalar fields as [`ApiError`] plus a map of violation messages
/// keyed by field or object identifier. The category tag is fixed at
/// construction; only the `errors` map is mutated, and only during the
/// single validation-handling pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub status_code: String,
    pub message: String,
    pub path: String,
    /// Violation message per identifier; duplicate keys are last-write-wins
    pub errors: HashMap<String, String>,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: INVALID_REQUEST.to_owned(),
            message: message.into(),
            path: path.into(),
            errors: HashMap::new(),
        }
    }

    /// Record one violation, overwriting any earlier message for the same key
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(key.into(), message.into());
    }
}
