//! Reading form values from JSON documents.

use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};

use tripplan_types::error::FormError;
use tripplan_types::form::FormValues;

/// Path value meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Read form values from a file, or from stdin when `source` is `-`.
pub async fn read_form_values(source: &Path) -> Result<FormValues, FormError> {
    if source.as_os_str() == STDIN_PATH {
        return read_form_values_from(tokio::io::stdin()).await;
    }

    let content = tokio::fs::read_to_string(source)
        .await
        .map_err(|e| FormError::Io(format!("{}: {e}", source.display())))?;
    parse_form_values(&content)
}

/// Read form values from any async reader.
pub async fn read_form_values_from<R>(mut reader: R) -> Result<FormValues, FormError>
where
    R: AsyncRead + Unpin,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .await
        .map_err(|e| FormError::Io(e.to_string()))?;
    parse_form_values(&content)
}

/// Parse a JSON document into form values. Blank input is an empty form.
pub fn parse_form_values(content: &str) -> Result<FormValues, FormError> {
    if content.trim().is_empty() {
        return Ok(FormValues::default());
    }
    let value: serde_json::Value = serde_json::from_str(content)?;
    let form = FormValues::from_json(value)?;
    tracing::debug!(
        has_origin = form.origin.is_some(),
        destinations = form.destinations.as_ref().map_or(0, Vec::len),
        "parsed form values"
    );
    Ok(form)
}
