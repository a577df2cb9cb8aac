//! Form values as submitted by the trip planner UI.
//!
//! The UI layer does no validation, so every field is optional and
//! deserialization is lenient: a value of the wrong JSON type is read as
//! absent instead of failing the whole form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FormError;
use crate::secret::ApiKey;

/// Raw, unvalidated trip form input.
///
/// Field names on the wire are camelCase (`startDate`, `openAiKey`, ...).
/// `destinations` keeps falsy entries (`None` or empty strings) exactly as
/// submitted; filtering them is the payload builder's job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    #[serde(deserialize_with = "lenient::text")]
    pub origin: Option<String>,

    #[serde(deserialize_with = "lenient::text_list")]
    pub destinations: Option<Vec<Option<String>>>,

    #[serde(deserialize_with = "lenient::text")]
    pub start_date: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub end_date: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub budget: Option<f64>,

    #[serde(deserialize_with = "lenient::count")]
    pub adults: Option<u32>,

    #[serde(deserialize_with = "lenient::count")]
    pub children: Option<u32>,

    #[serde(deserialize_with = "lenient::count")]
    pub seniors: Option<u32>,

    #[serde(deserialize_with = "lenient::text")]
    pub purpose: Option<String>,

    /// Trip intent tag (`family_friendly`, `comfort`, `cheapest`, ...).
    #[serde(deserialize_with = "lenient::text")]
    pub objective: Option<String>,

    #[serde(rename = "openAiKey", deserialize_with = "lenient::api_key")]
    pub openai_key: Option<ApiKey>,

    #[serde(rename = "tavilyKey", deserialize_with = "lenient::api_key")]
    pub tavily_key: Option<ApiKey>,
}

impl FormValues {
    /// Parse form values from a JSON object.
    ///
    /// Individual fields never fail. A document that is not an object
    /// (array, string, ...) is rejected since it has no fields to read.
    pub fn from_json(value: Value) -> Result<Self, FormError> {
        if !value.is_object() {
            return Err(FormError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coercing deserializers: wrong-typed input becomes `None`.
mod lenient {
    use super::*;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            _ => None,
        })
    }

    pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Number(n) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Some(v) = n.as_u64() {
            return Ok(u32::try_from(v).ok());
        }
        // Whole floats such as `2.0` still count.
        Ok(n.as_f64()
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v as u32))
    }

    pub fn api_key<'de, D>(deserializer: D) -> Result<Option<ApiKey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(text(deserializer)?.map(ApiKey::new))
    }
}
