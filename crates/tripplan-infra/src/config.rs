//! Global configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.tripplan/` in
//! production) and deserializes it into [`GlobalConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use tripplan_types::config::GlobalConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TRIPPLAN_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `TRIPPLAN_DATA_DIR`, then `~/.tripplan`, then `./.tripplan`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".tripplan");
    }

    PathBuf::from(".tripplan")
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// Never fails: a missing file yields defaults quietly; an unreadable or
/// malformed one logs a warning and yields defaults. Blank `template_path`
/// or `log_filter` entries are treated as unset.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!(path = %config_path.display(), "cannot read config file: {err}; using defaults");
            return GlobalConfig::default();
        }
    };

    let config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => normalize(config),
        Err(err) => {
            tracing::warn!(path = %config_path.display(), "invalid config file: {err}; using defaults");
            return GlobalConfig::default();
        }
    };

    tracing::debug!(
        path = %config_path.display(),
        template_path = ?config.template_path,
        log_filter = ?config.log_filter,
        "loaded config"
    );
    config
}

fn normalize(mut config: GlobalConfig) -> GlobalConfig {
    config.template_path = config
        .template_path
        .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty());
    config.log_filter = config
        .log_filter
        .map(|filter| filter.trim().to_string())
        .filter(|filter| !filter.is_empty());
    config
}

/// Resolve a configured path against the data directory.
pub fn resolve_config_path(data_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
