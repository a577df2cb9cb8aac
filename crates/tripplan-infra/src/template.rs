//! Sample request template loading.
//!
//! Templates are TOML by default, or JSON when the file extension is
//! `.json`. Either way they must pass `SampleRequest` validation.

use std::fmt;
use std::path::{Path, PathBuf};

use tripplan_types::config::{GlobalConfig, SAMPLE_REQUEST_FILE};
use tripplan_types::error::TemplateError;
use tripplan_types::sample::SampleRequest;

use crate::config::resolve_config_path;

/// Read and validate a template file. Any failure is returned.
pub async fn read_sample_request(path: &Path) -> Result<SampleRequest, TemplateError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TemplateError::Io(format!("{}: {e}", path.display())))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let sample = if is_json {
        serde_json::from_str::<SampleRequest>(&content)
            .map_err(|e| TemplateError::Parse(format!("{}: {e}", path.display())))?
    } else {
        toml::from_str::<SampleRequest>(&content)
            .map_err(|e| TemplateError::Parse(format!("{}: {e}", path.display())))?
    };

    tracing::debug!(path = %path.display(), origin = %sample.origin, "loaded sample request template");
    Ok(sample)
}

/// Where the effective template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// `--template` flag or `TRIPPLAN_TEMPLATE`.
    Explicit(PathBuf),
    /// `template_path` in `config.toml`.
    Configured(PathBuf),
    /// `{data_dir}/sample_request.toml`.
    DataDir(PathBuf),
    Builtin,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Explicit(path) => write!(f, "{} (--template)", path.display()),
            TemplateSource::Configured(path) => write!(f, "{} (config.toml)", path.display()),
            TemplateSource::DataDir(path) => write!(f, "{} (data dir)", path.display()),
            TemplateSource::Builtin => write!(f, "built-in"),
        }
    }
}

/// A validated template together with the source it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub sample: SampleRequest,
    pub source: TemplateSource,
}

impl ResolvedTemplate {
    fn builtin() -> Self {
        Self {
            sample: SampleRequest::default(),
            source: TemplateSource::Builtin,
        }
    }
}

/// Load a template permissively.
///
/// - Missing file: debug log, `None`.
/// - Unreadable, malformed, or invalid file: warning, `None`.
pub async fn try_load_sample_request(path: &Path) -> Option<SampleRequest> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        tracing::debug!("No template found at {}, using built-in template", path.display());
        return None;
    }

    match read_sample_request(path).await {
        Ok(sample) => Some(sample),
        Err(err) => {
            tracing::warn!("{err}, using built-in template");
            None
        }
    }
}

/// Pick the effective template and report where it came from.
///
/// Priority:
/// 1. `explicit` path (from `--template` / `TRIPPLAN_TEMPLATE`); errors propagate
/// 2. `template_path` from `config.toml`
/// 3. `{data_dir}/sample_request.toml`
/// 4. The built-in template
///
/// Levels 2 and 3 are permissive: a broken file logs a warning and yields
/// the built-in template, reported as [`TemplateSource::Builtin`].
pub async fn resolve_sample_request(
    data_dir: &Path,
    config: &GlobalConfig,
    explicit: Option<&Path>,
) -> Result<ResolvedTemplate, TemplateError> {
    if let Some(path) = explicit {
        let sample = read_sample_request(path).await?;
        return Ok(ResolvedTemplate {
            sample,
            source: TemplateSource::Explicit(path.to_path_buf()),
        });
    }

    let (path, source): (PathBuf, fn(PathBuf) -> TemplateSource) = match &config.template_path {
        Some(configured) => (
            resolve_config_path(data_dir, configured),
            TemplateSource::Configured,
        ),
        None => (data_dir.join(SAMPLE_REQUEST_FILE), TemplateSource::DataDir),
    };

    Ok(match try_load_sample_request(&path).await {
        Some(sample) => ResolvedTemplate {
            sample,
            source: source(path),
        },
        None => ResolvedTemplate::builtin(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CHICAGO_TOML: &str = r#"
origin = "Chicago"
destinations = ["Lisbon"]
budget_total = 5200.0
currency = "EUR"
purpose = "leisure"

[dates]
start = "2026-05-10"
end = "2026-05-20"

[party]
adults = 2
children = 0
seniors = 0

[prefs]
objective = "comfort"
"#;

    async fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn read_sample_request_toml() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "chicago.toml", CHICAGO_TOML).await;

        let sample = read_sample_request(&path).await.unwrap();
        assert_eq!(sample.origin, "Chicago");
        assert_eq!(sample.currency, "EUR");
        assert_eq!(sample.prefs.objective, "comfort");
    }

    #[tokio::test]
    async fn read_sample_request_json_by_extension() {
        let tmp = TempDir::new().unwrap();
        let json = serde_json::to_string(SampleRequest::builtin()).unwrap();
        let path = write(&tmp, "sample.JSON", &json).await;

        let sample = read_sample_request(&path).await.unwrap();
        assert_eq!(&sample, SampleRequest::builtin());
    }

    #[tokio::test]
    async fn read_sample_request_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_sample_request(&tmp.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[tokio::test]
    async fn read_sample_request_rejects_invalid_template() {
        let tmp = TempDir::new().unwrap();
        let broken = CHICAGO_TOML.replace(r#"destinations = ["Lisbon"]"#, "destinations = []");
        let path = write(&tmp, "broken.toml", &broken).await;

        let err = read_sample_request(&path).await.unwrap_err();
        assert!(matches!(err, TemplateError::Parse(_)));
        assert!(err.to_string().contains("destination"));
    }

    #[tokio::test]
    async fn try_load_sample_request_skips_broken_files() {
        let tmp = TempDir::new().unwrap();
        assert!(try_load_sample_request(&tmp.path().join("nope.toml")).await.is_none());

        let path = write(&tmp, "garbage.toml", "not { toml").await;
        assert!(try_load_sample_request(&path).await.is_none());

        let path = write(&tmp, "chicago.toml", CHICAGO_TOML).await;
        let sample = try_load_sample_request(&path).await.unwrap();
        assert_eq!(sample.origin, "Chicago");
    }

    #[tokio::test]
    async fn resolve_prefers_explicit_path() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, SAMPLE_REQUEST_FILE, &CHICAGO_TOML.replace("Chicago", "Denver")).await;
        let explicit = write(&tmp, "explicit.toml", CHICAGO_TOML).await;

        let resolved =
            resolve_sample_request(tmp.path(), &GlobalConfig::default(), Some(explicit.as_path()))
                .await
                .unwrap();
        assert_eq!(resolved.sample.origin, "Chicago");
        assert_eq!(resolved.source, TemplateSource::Explicit(explicit));
    }

    #[tokio::test]
    async fn resolve_explicit_path_errors_propagate() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.toml");
        let result =
            resolve_sample_request(tmp.path(), &GlobalConfig::default(), Some(missing.as_path())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn resolve_uses_configured_path_relative_to_data_dir() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "europe.toml", CHICAGO_TOML).await;
        let config = GlobalConfig {
            template_path: Some(PathBuf::from("europe.toml")),
            log_filter: None,
        };

        let resolved = resolve_sample_request(tmp.path(), &config, None).await.unwrap();
        assert_eq!(resolved.sample.origin, "Chicago");
        assert_eq!(resolved.source, TemplateSource::Configured(path));
    }

    #[tokio::test]
    async fn resolve_broken_configured_path_reports_builtin() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "europe.toml", "not { toml").await;
        // The data-dir file is not consulted once a path is configured.
        write(&tmp, SAMPLE_REQUEST_FILE, CHICAGO_TOML).await;
        let config = GlobalConfig {
            template_path: Some(PathBuf::from("europe.toml")),
            log_filter: None,
        };

        let resolved = resolve_sample_request(tmp.path(), &config, None).await.unwrap();
        assert_eq!(&resolved.sample, SampleRequest::builtin());
        assert_eq!(resolved.source, TemplateSource::Builtin);
    }

    #[tokio::test]
    async fn resolve_uses_data_dir_sample_file() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, SAMPLE_REQUEST_FILE, CHICAGO_TOML).await;

        let resolved = resolve_sample_request(tmp.path(), &GlobalConfig::default(), None)
            .await
            .unwrap();
        assert_eq!(resolved.sample.origin, "Chicago");
        assert_eq!(resolved.source, TemplateSource::DataDir(path));
    }

    #[tokio::test]
    async fn resolve_defaults_to_builtin() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolve_sample_request(tmp.path(), &GlobalConfig::default(), None)
            .await
            .unwrap();
        assert_eq!(&resolved.sample, SampleRequest::builtin());
        assert_eq!(resolved.source, TemplateSource::Builtin);
    }

    #[test]
    fn template_source_display() {
        assert_eq!(TemplateSource::Builtin.to_string(), "built-in");
        assert_eq!(
            TemplateSource::Configured(PathBuf::from("/data/europe.toml")).to_string(),
            "/data/europe.toml (config.toml)"
        );
        assert_eq!(
            TemplateSource::Explicit(PathBuf::from("trip.json")).to_string(),
            "trip.json (--template)"
        );
    }
}
