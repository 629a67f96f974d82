//! Reporter config loader (strict parsing + env overrides).
//!
//! The YAML file is optional. When it is absent the defaults apply, so the
//! binary runs with nothing but `PORT` and `GEMINI_API_KEY` in the environment.

pub mod schema;

use std::fs;
use std::path::Path;

use silentwatch_core::error::{Result, SilentWatchError};

pub use schema::{GeminiSection, GenerationSection, ProviderKind, ReporterConfig, ServerSection};

pub const DEFAULT_CONFIG_PATH: &str = "silentwatch.yaml";
pub const CONFIG_PATH_ENV: &str = "SILENTWATCH_CONFIG";
pub const PORT_ENV: &str = "PORT";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load the config from `SILENTWATCH_CONFIG` (or `silentwatch.yaml` if present),
/// then apply process environment overrides.
pub fn load() -> Result<ReporterConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV).ok();
    let mut cfg = match explicit.as_deref() {
        Some(path) => load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => ReporterConfig::default(),
    };
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok())?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<ReporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SilentWatchError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ReporterConfig> {
    let cfg: ReporterConfig = serde_yaml::from_str(s)
        .map_err(|e| SilentWatchError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply `PORT` and `GEMINI_API_KEY` from `lookup`.
///
/// An empty or whitespace-only key counts as absent.
pub fn apply_env_overrides<F>(cfg: &mut ReporterConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(PORT_ENV) {
        let port: u16 = raw.trim().parse().map_err(|e| {
            SilentWatchError::BadRequest(format!("{PORT_ENV} must be a port number: {e}"))
        })?;
        cfg.server.port = port;
    }

    cfg.generation.api_key = lookup(API_KEY_ENV)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    cfg.validate()
}
