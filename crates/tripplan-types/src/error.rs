use thiserror::Error;

/// Errors related to loading or validating a sample request template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template must list at least one destination")]
    NoDestinations,

    #[error("template budget_total must be a positive finite number, got {0}")]
    InvalidBudget(f64),

    #[error("template field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("failed to read template: {0}")]
    Io(String),

    #[error("failed to parse template: {0}")]
    Parse(String),
}

/// Errors related to reading form values from an external source.
///
/// Field-level problems are never errors; only an unreadable source or a
/// document that is not a JSON object is.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read form values: {0}")]
    Io(String),

    #[error("form values must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid form JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
