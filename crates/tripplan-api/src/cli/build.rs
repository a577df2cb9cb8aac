//! `tripplan build` -- form values in, request payload out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tripplan_core::PayloadBuilder;
use tripplan_types::form::FormValues;
use tripplan_types::secret::ApiKey;

use crate::state::AppState;

#[derive(Args, Default)]
pub struct BuildArgs {
    /// JSON file with form values (`-` reads stdin).
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Departure city.
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination city (repeatable, order preserved).
    #[arg(long = "destination", value_name = "CITY")]
    pub destinations: Vec<String>,

    /// Trip start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Trip end date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<String>,

    /// Total budget.
    #[arg(long, allow_negative_numbers = true)]
    pub budget: Option<f64>,

    #[arg(long)]
    pub adults: Option<u32>,

    #[arg(long)]
    pub children: Option<u32>,

    #[arg(long)]
    pub seniors: Option<u32>,

    /// Free-text purpose; inferred from the objective when blank.
    #[arg(long)]
    pub purpose: Option<String>,

    /// Objective tag (family_friendly, comfort, cheapest, ...).
    #[arg(long)]
    pub objective: Option<String>,

    /// OpenAI API key forwarded to the planner.
    #[arg(long, env = "TRIPPLAN_OPENAI_API_KEY", hide_env_values = true)]
    pub openai_key: Option<String>,

    /// Tavily API key forwarded to the planner.
    #[arg(long, env = "TRIPPLAN_TAVILY_API_KEY", hide_env_values = true)]
    pub tavily_key: Option<String>,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

impl BuildArgs {
    /// Overlay flag values onto form values read from a file.
    ///
    /// A flag replaces the file's field as a whole; `--destination` replaces
    /// the file's list rather than appending to it.
    pub fn apply_to(self, mut form: FormValues) -> FormValues {
        if self.origin.is_some() {
            form.origin = self.origin;
        }
        if !self.destinations.is_empty() {
            form.destinations = Some(self.destinations.into_iter().map(Some).collect());
        }
        if self.start_date.is_some() {
            form.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            form.end_date = self.end_date;
        }
        if self.budget.is_some() {
            form.budget = self.budget;
        }
        if self.adults.is_some() {
            form.adults = self.adults;
        }
        if self.children.is_some() {
            form.children = self.children;
        }
        if self.seniors.is_some() {
            form.seniors = self.seniors;
        }
        if self.purpose.is_some() {
            form.purpose = self.purpose;
        }
        if self.objective.is_some() {
            form.objective = self.objective;
        }
        if let Some(key) = self.openai_key {
            form.openai_key = Some(ApiKey::new(key));
        }
        if let Some(key) = self.tavily_key {
            form.tavily_key = Some(ApiKey::new(key));
        }
        form
    }
}

/// Build a payload and print it to stdout.
pub async fn build(state: &AppState, args: BuildArgs) -> Result<()> {
    let output = render_payload(state, args).await?;
    println!("{output}");
    Ok(())
}

/// Read the form (if any), overlay flags and serialize the payload.
async fn render_payload(state: &AppState, mut args: BuildArgs) -> Result<String> {
    let form = match args.form.take() {
        Some(path) => tripplan_infra::form::read_form_values(&path)
            .await
            .with_context(|| format!("failed to load form values from {}", path.display()))?,
        None => FormValues::default(),
    };
    let compact = args.compact;
    let form = args.apply_to(form);

    let payload = PayloadBuilder::new(&state.template).build(&form);

    let output = if compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    Ok(output)
}
