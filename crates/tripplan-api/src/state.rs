//! Shared application state, resolved once at startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tripplan_infra::template::{ResolvedTemplate, TemplateSource};
use tripplan_types::config::GlobalConfig;
use tripplan_types::sample::SampleRequest;

pub struct AppState {
    pub data_dir: PathBuf,
    /// Effective sample template.
    pub template: SampleRequest,
    /// Where `template` was actually loaded from.
    pub template_source: TemplateSource,
}

impl AppState {
    pub async fn init(
        data_dir: PathBuf,
        config: &GlobalConfig,
        explicit_template: Option<&Path>,
    ) -> Result<Self> {
        let ResolvedTemplate { sample: template, source: template_source } =
            tripplan_infra::template::resolve_sample_request(&data_dir, config, explicit_template)
                .await
                .context("failed to load sample request template")?;

        tracing::info!(
            data_dir = %data_dir.display(),
            template = %template_source,
            origin = %template.origin,
            destinations = template.destinations.len(),
            "application state initialized"
        );

        Ok(Self {
            data_dir,
            template,
            template_source,
        })
    }
}
