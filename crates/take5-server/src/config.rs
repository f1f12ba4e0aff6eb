//! Server configuration
//!
//! Read once at startup from a key lookup: Shuttle secrets in the Shuttle
//! binary, the process environment (plus `.env`) in the local binary.
//! Blank values count as unset.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

use take5::{DomainError, PersonaCatalog, Provider};

/// Personas compiled into the binary, used unless PERSONAS_PATH is set
pub const DEFAULT_PERSONAS: &str = include_str!("../personas.toml");

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enables Anthropic-backed personas. Read from ANTHROPIC_API_KEY.
    pub anthropic_api_key: Option<String>,
    /// Enables OpenAI-backed personas. Read from OPENAI_API_KEY.
    pub openai_api_key: Option<String>,
    /// Read from ANTHROPIC_BASE_URL.
    pub anthropic_base_url: String,
    /// Read from OPENAI_BASE_URL.
    pub openai_base_url: String,
    /// Bound on every outbound provider call. Read from PROVIDER_TIMEOUT_SECS.
    pub provider_timeout: Duration,
    /// TOML file overriding the embedded personas. Read from PERSONAS_PATH.
    pub personas_path: Option<PathBuf>,
    /// Listen address for the local binary. Read from BIND_ADDR.
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            openai_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            personas_path: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    DomainError::Configuration(format!(
                        "PROVIDER_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(DomainError::Configuration(
                        "PROVIDER_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.provider_timeout,
        };

        Ok(Self {
            anthropic_api_key: get(Provider::Anthropic.api_key_name()),
            openai_api_key: get(Provider::OpenAI.api_key_name()),
            anthropic_base_url: get("ANTHROPIC_BASE_URL").unwrap_or(defaults.anthropic_base_url),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            provider_timeout,
            personas_path: get("PERSONAS_PATH").map(PathBuf::from),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }

    /// Build the config from the process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Anthropic => self.anthropic_api_key.as_deref(),
            Provider::OpenAI => self.openai_api_key.as_deref(),
        }
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::Anthropic => &self.anthropic_base_url,
            Provider::OpenAI => &self.openai_base_url,
        }
    }

    /// Load the persona catalog from PERSONAS_PATH, or the embedded default
    pub fn load_personas(&self) -> anyhow::Result<PersonaCatalog> {
        match &self.personas_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read personas from {:?}", path))?;
                parse_personas(&content)
                    .with_context(|| format!("Invalid personas file {:?}", path))
            }
            None => parse_personas(DEFAULT_PERSONAS).context("Invalid embedded personas"),
        }
    }
}

/// Parse a persona catalog from TOML
pub fn parse_personas(content: &str) -> Result<PersonaCatalog, DomainError> {
    toml::from_str(content).map_err(|e| DomainError::Configuration(e.to_string()))
}
