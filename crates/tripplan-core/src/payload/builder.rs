//! PayloadBuilder -- merges form values over a sample request template.
//!
//! The builder is a best-effort adapter, not a validating boundary: it
//! never fails. Every unset or unusable form field silently takes the
//! template's value. Business rules (date ordering, budget sanity) are the
//! backend's concern.

use tripplan_types::form::FormValues;
use tripplan_types::request::{Party, Prefs, RequestPayload, TripDates};
use tripplan_types::sample::SampleRequest;
use tripplan_types::secret::ApiKey;

use super::fallback::{nullish_or, truthy_or, Truthy};
use super::purpose::infer_purpose;

/// Build a request payload against the built-in sample template.
pub fn build_request_payload(form: &FormValues) -> RequestPayload {
    PayloadBuilder::default().build(form)
}

/// Stateless builder bound to a template.
///
/// | Field            | Rule                                                  |
/// |------------------|-------------------------------------------------------|
/// | origin, dates    | form value if truthy, else template                   |
/// | destinations     | truthy entries, if any remain, else template          |
/// | budget_total     | form budget if finite and > 0, else template          |
/// | party.*          | form count if present (0 accepted), else template     |
/// | purpose          | trimmed form purpose, else inferred from objective    |
/// | prefs.objective  | form objective if truthy, else template               |
/// | *_api_key        | trimmed form key, omitted when blank                  |
#[derive(Debug, Clone, Copy)]
pub struct PayloadBuilder<'a> {
    template: &'a SampleRequest,
}

impl Default for PayloadBuilder<'static> {
    fn default() -> Self {
        Self::new(SampleRequest::builtin())
    }
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(template: &'a SampleRequest) -> Self {
        Self { template }
    }

    /// Produce a fresh payload. `form` is never modified.
    pub fn build(&self, form: &FormValues) -> RequestPayload {
        let template = self.template;
        let mut fallbacks: Vec<&'static str> = Vec::new();
        let mut track = |field: &'static str, used_form: bool| {
            if !used_form {
                fallbacks.push(field);
            }
        };

        let origin = truthy_or(form.origin.as_ref(), &template.origin);
        track("origin", form.origin.is_truthy());

        let submitted = truthy_destinations(form.destinations.as_deref());
        track("destinations", !submitted.is_empty());
        let destinations = if submitted.is_empty() {
            template.destinations.clone()
        } else {
            submitted
        };

        let dates = TripDates {
            start: truthy_or(form.start_date.as_ref(), &template.dates.start),
            end: truthy_or(form.end_date.as_ref(), &template.dates.end),
        };
        track("dates.start", form.start_date.is_truthy());
        track("dates.end", form.end_date.is_truthy());

        let budget = form.budget.filter(|b| b.is_finite() && *b > 0.0);
        track("budget_total", budget.is_some());
        let budget_total = budget.unwrap_or(template.budget_total);

        let party = Party {
            adults: nullish_or(form.adults, template.party.adults),
            children: nullish_or(form.children, template.party.children),
            seniors: nullish_or(form.seniors, template.party.seniors),
        };
        track("party.adults", form.adults.is_some());
        track("party.children", form.children.is_some());
        track("party.seniors", form.seniors.is_some());

        let purpose = match form.purpose.as_deref().map(str::trim) {
            Some(purpose) if purpose.is_truthy() => purpose.to_string(),
            _ => infer_purpose(form.objective.as_deref()).to_string(),
        };

        let prefs = Prefs {
            objective: truthy_or(form.objective.as_ref(), &template.prefs.objective),
            extra: template.prefs.extra.clone(),
        };
        track("prefs.objective", form.objective.is_truthy());

        let openai_api_key = form.openai_key.as_ref().and_then(ApiKey::trimmed);
        let tavily_api_key = form.tavily_key.as_ref().and_then(ApiKey::trimmed);

        tracing::debug!(
            fallbacks = ?fallbacks,
            destinations = destinations.len(),
            openai_key = %masked_or_none(openai_api_key.as_ref()),
            tavily_key = %masked_or_none(tavily_api_key.as_ref()),
            "built trip request payload"
        );

        RequestPayload {
            origin,
            destinations,
            dates,
            budget_total,
            currency: template.currency.clone(),
            party,
            purpose,
            prefs,
            openai_api_key,
            tavily_api_key,
            extra: template.extra.clone(),
        }
    }
}

/// Loggable form of an optional key: last four characters or `none`.
fn masked_or_none(key: Option<&ApiKey>) -> String {
    key.map_or_else(|| "none".to_string(), ApiKey::masked)
}

/// Keep the truthy entries of a submitted destination list.
fn truthy_destinations(submitted: Option<&[Option<String>]>) -> Vec<String> {
    submitted
        .unwrap_or_default()
        .iter()
        .filter(|entry| entry.is_truthy())
        .flatten()
        .cloned()
        .collect()
}
