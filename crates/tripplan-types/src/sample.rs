//! The sample request template used to fill unset form fields.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use std::ops::Deref;
use std::sync::LazyLock;

use crate::error::TemplateError;
use crate::request::{Party, Prefs, RequestPayload, TripDates, DEFAULT_PURPOSE};

static BUILTIN: LazyLock<SampleRequest> = LazyLock::new(|| SampleRequest {
    payload: RequestPayload {
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
        purpose: DEFAULT_PURPOSE.to_string(),
        prefs: Prefs {
            objective: "balanced".to_string(),
            extra: Map::new(),
        },
        openai_api_key: None,
        tavily_api_key: None,
        extra: Map::new(),
    },
});

/// A validated, fully populated default request.
///
/// Guarantees: at least one non-empty destination, a positive finite
/// budget, non-empty origin/dates/objective, and no credentials. The payload
/// builder relies on these so its output is always complete. `purpose` is
/// optional in template files since the builder always recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RequestPayload", into = "RequestPayload")]
pub struct SampleRequest {
    payload: RequestPayload,
}

impl SampleRequest {
    /// Validate `payload` as a template. Credentials are dropped.
    pub fn new(mut payload: RequestPayload) -> Result<Self, TemplateError> {
        payload.destinations.retain(|d| !d.is_empty());
        if payload.destinations.is_empty() {
            return Err(TemplateError::NoDestinations);
        }
        if !payload.budget_total.is_finite() || payload.budget_total <= 0.0 {
            return Err(TemplateError::InvalidBudget(payload.budget_total));
        }

        let required = [
            ("origin", &payload.origin),
            ("dates.start", &payload.dates.start),
            ("dates.end", &payload.dates.end),
            ("prefs.objective", &payload.prefs.objective),
        ];
        if let Some((name, _)) = required.into_iter().find(|(_, value)| value.is_empty()) {
            return Err(TemplateError::EmptyField(name));
        }

        payload.openai_api_key = None;
        payload.tavily_api_key = None;
        Ok(Self { payload })
    }

    /// The template shipped with the crate.
    pub fn builtin() -> &'static SampleRequest {
        &BUILTIN
    }

    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Deref for SampleRequest {
    type Target = RequestPayload;

    fn deref(&self) -> &Self::Target {
        &self.payload
    }
}

impl TryFrom<RequestPayload> for SampleRequest {
    type Error = TemplateError;

    fn try_from(payload: RequestPayload) -> Result<Self, Self::Error> {
        Self::new(payload)
    }
}

impl From<SampleRequest> for RequestPayload {
    fn from(sample: SampleRequest) -> Self {
        sample.payload
    }
}
