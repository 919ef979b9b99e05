use std::env;
use std::path::{Path, PathBuf};

use cekkirim_core_rs::ReferenceData;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{CliError, CliResult};

pub const REFERENCE_DATA_VAR: &str = "CEKKIRIM_REFERENCE_DATA";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// JSON reference bundle; the built-in tables are used when unset
    pub reference_data: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present. Nothing is required.
    pub fn from_env() -> Self {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Self {
            reference_data: env::var(REFERENCE_DATA_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            log_level: get_var_or("LOG_LEVEL", "warn"),
        }
    }

    /// Resolve the reference bundle, preferring an explicit `--reference-data` path
    pub fn load_reference(&self, override_path: Option<&Path>) -> CliResult<ReferenceData> {
        match override_path.or(self.reference_data.as_deref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading reference data");
                let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(ReferenceData::from_json(&json)?)
            }
            None => Ok(ReferenceData::default()),
        }
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Initialize the tracing subscriber with env-based filtering.
///
/// Reads `RUST_LOG` (or `LOG_LEVEL`) to set the filter and falls back to
/// `default_level`. Logs go to stderr so `--json` output stays parseable.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
