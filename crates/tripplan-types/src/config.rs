//! Global configuration types for the trip plan builder.
//!
//! `GlobalConfig` represents the optional `config.toml` in the data
//! directory. Every field is optional; an empty file is a valid config.

use serde::{Deserialize, Serialize};

use std::path::PathBuf;

/// File name of the sample template looked up in the data directory.
pub const SAMPLE_REQUEST_FILE: &str = "sample_request.toml";

/// Top-level configuration.
///
/// Loaded from `~/.tripplan/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Path to a sample request template (TOML, or JSON by extension).
    /// Relative paths resolve against the data directory.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// `tracing` filter directive used when no `-v` flag is given.
    #[serde(default)]
    pub log_filter: Option<String>,
}
