//! Error response body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON body for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Per-field validation messages, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, Vec<String>>>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            fields: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_fields(mut self, fields: HashMap<String, Vec<String>>) -> Self {
        self.fields = Some(fields);
        self
    }
}
