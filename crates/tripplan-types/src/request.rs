//! The request payload sent to the trip planning backend.
//!
//! Field names are the backend's wire contract and must not change:
//! `origin`, `destinations`, `dates`, `budget_total`, `party`, `purpose`,
//! `prefs`, `openai_api_key`, `tavily_api_key`. Any other template field
//! (e.g. `currency`, `constraints`) rides along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::secret::ApiKey;

/// A fully populated trip planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub origin: String,
    pub destinations: Vec<String>,
    pub dates: TripDates,
    pub budget_total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub party: Party,
    #[serde(default = "default_purpose")]
    pub purpose: String,
    pub prefs: Prefs,

    /// Present only when the user supplied a non-blank key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<ApiKey>,

    /// Present only when the user supplied a non-blank key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tavily_api_key: Option<ApiKey>,

    /// Template fields the builder does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Purpose used when no objective (or an unknown one) is given.
pub const DEFAULT_PURPOSE: &str = "leisure";

fn default_currency() -> String {
    "USD".to_string()
}

fn default_purpose() -> String {
    DEFAULT_PURPOSE.to_string()
}

/// Travel window, as ISO-8601 date strings. Ordering is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDates {
    pub start: String,
    pub end: String,
}

/// Traveller head counts. Zero is a meaningful value for every bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub adults: u32,
    pub children: u32,
    pub seniors: u32,
}

/// Planning preferences.
///
/// Only `objective` is interpreted by the builder; everything else the
/// template carries (pace, lodging style, ...) is copied through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    pub objective: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> RequestPayload {
        RequestPayload {
            origin: "San Francisco".to_string(),
            destinations: vec!["Paris".to_string(), "Amsterdam".to_string()],
            dates: TripDates {
                start: "2025-10-10".to_string(),
                end: "2025-10-20".to_string(),
            },
            budget_total: 4500.0,
            currency: "USD".to_string(),
            party: Party {
                adults: 2,
                children: 1,
                seniors: 0,
            },
            purpose: "leisure".to_string(),
            prefs: Prefs {
                objective: "balanced".to_string(),
                extra: Map::new(),
            },
            openai_api_key: None,
            tavily_api_key: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "origin": "San Francisco",
                "destinations": ["Paris", "Amsterdam"],
                "dates": {"start": "2025-10-10", "end": "2025-10-20"},
                "budget_total": 4500.0,
                "currency": "USD",
                "party": {"adults": 2, "children": 1, "seniors": 0},
                "purpose": "leisure",
                "prefs": {"objective": "balanced"},
            })
        );
    }

    #[test]
    fn test_credentials_serialized_only_when_present() {
        let mut with_key = payload();
        with_key.tavily_api_key = Some(ApiKey::new("tv-user"));

        let value = serde_json::to_value(&with_key).unwrap();
        assert_eq!(value["tavily_api_key"], "tv-user");
        assert!(value.get("openai_api_key").is_none());
    }

    #[test]
    fn test_extra_fields_are_flattened() {
        let value = json!({
            "origin": "Chicago",
            "destinations": ["Lisbon"],
            "dates": {"start": "2026-05-10", "end": "2026-05-20"},
            "budget_total": 5200,
            "party": {"adults": 2, "children": 0, "seniors": 0},
            "purpose": "leisure",
            "prefs": {"objective": "comfort", "pace": "relaxed"},
            "interests": ["food"],
        });

        let parsed: RequestPayload = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.currency, "USD");
        assert_eq!(parsed.prefs.extra["pace"], "relaxed");
        assert_eq!(parsed.extra["interests"], json!(["food"]));

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["prefs"]["pace"], "relaxed");
        assert_eq!(back["interests"], json!(["food"]));
    }
}
