use serde::{Deserialize, Serialize};

use std::fmt;

/// A provider API key forwarded to the planning backend.
///
/// The value is opaque: it is never validated, only trimmed by the payload
/// builder. Debug and Display output are redacted so a payload can be logged
/// without leaking credentials. Serialization emits the raw value because
/// the backend needs it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Show masked representation: last 4 chars visible.
    pub fn masked(&self) -> String {
        let count = self.0.chars().count();
        if count <= 4 {
            "****".to_string()
        } else {
            let tail: String = self.0.chars().skip(count - 4).collect();
            format!("****{tail}")
        }
    }

    /// Trim surrounding whitespace, returning `None` when nothing is left.
    pub fn trimmed(&self) -> Option<ApiKey> {
        let trimmed = self.0.trim();
        (!trimmed.is_empty()).then(|| ApiKey::new(trimmed))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(\"***\")")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}
