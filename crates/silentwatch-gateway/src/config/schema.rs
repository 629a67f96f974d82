use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use silentwatch_core::error::{Result, SilentWatchError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub generation: GenerationSection,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            generation: GenerationSection::default(),
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SilentWatchError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.generation.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SilentWatchError::BadRequest("server.port must be non-zero".into()));
        }
        self.host
            .parse::<IpAddr>()
            .map_err(|e| SilentWatchError::BadRequest(format!("server.host must be an IP address: {e}")))?;
        Ok(())
    }

    /// Bind address. Only valid after `validate`.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| SilentWatchError::BadRequest(format!("server.host: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}

/// Which text-generation implementation backs the explanation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Raw HTTPS calls to the Gemini REST API.
    #[default]
    Gemini,
    /// No external service; every narration uses the fallback sentence.
    Offline,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Offline => "offline",
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    #[serde(default)]
    pub provider: ProviderKind,

    #[serde(default)]
    pub gemini: GeminiSection,

    /// Never read from the file; filled from `GEMINI_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self { provider: ProviderKind::default(), gemini: GeminiSection::default(), api_key: None }
    }
}

// Keeps the credential out of debug logs.
impl fmt::Debug for GenerationSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationSection")
            .field("provider", &self.provider)
            .field("gemini", &self.gemini)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GenerationSection {
    pub fn validate(&self) -> Result<()> {
        self.gemini.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GeminiSection {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), model: default_model(), timeout_ms: default_timeout_ms() }
    }
}

impl GeminiSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SilentWatchError::BadRequest(
                "generation.gemini.endpoint must start with http:// or https://".into(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(SilentWatchError::BadRequest(
                "generation.gemini.model must not be empty".into(),
            ));
        }
        if !(100..=120000).contains(&self.timeout_ms) {
            return Err(SilentWatchError::BadRequest(
                "generation.gemini.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_timeout_ms() -> u64 {
    10000
}
