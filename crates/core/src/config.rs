//! Prediction endpoint settings
//!
//! Four string values configure the client: the prediction endpoint URL,
//! the subscription key, and the CLU project and deployment names. They
//! come from a TOML file or from environment variables; a missing source
//! or key is fatal at startup rather than a confusing failure later.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name searched in the working directory and the platform
/// config directory
pub const SETTINGS_FILE: &str = "clockbot.toml";

const ENV_ENDPOINT: &str = "CLU_ENDPOINT";
const ENV_API_KEY: &str = "CLU_API_KEY";
const ENV_PROJECT_NAME: &str = "CLU_PROJECT_NAME";
const ENV_DEPLOYMENT_NAME: &str = "CLU_DEPLOYMENT_NAME";

/// Connection settings for the prediction endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Full prediction URL, including any api-version query string
    pub endpoint: String,

    /// Value for the Ocp-Apim-Subscription-Key header
    pub api_key: String,

    /// CLU project name sent in request parameters
    pub project_name: String,

    /// CLU deployment name sent in request parameters
    pub deployment_name: String,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Create settings from CLU_* environment variables
    pub fn from_env() -> Result<Self> {
        let settings = Self {
            endpoint: env::var(ENV_ENDPOINT)
                .with_context(|| format!("Missing {} environment variable", ENV_ENDPOINT))?,
            api_key: env::var(ENV_API_KEY)
                .with_context(|| format!("Missing {} environment variable", ENV_API_KEY))?,
            project_name: env::var(ENV_PROJECT_NAME)
                .with_context(|| format!("Missing {} environment variable", ENV_PROJECT_NAME))?,
            deployment_name: env::var(ENV_DEPLOYMENT_NAME)
                .with_context(|| format!("Missing {} environment variable", ENV_DEPLOYMENT_NAME))?,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("endpoint", &self.endpoint),
            ("api_key", &self.api_key),
            ("project_name", &self.project_name),
            ("deployment_name", &self.deployment_name),
        ] {
            if value.trim().is_empty() {
                bail!("Settings value '{}' is empty", name);
            }
        }
        Ok(())
    }
}

/// Check whether all CLU_* environment variables are set
pub fn env_configured() -> bool {
    env::var(ENV_ENDPOINT).is_ok()
        && env::var(ENV_API_KEY).is_ok()
        && env::var(ENV_PROJECT_NAME).is_ok()
        && env::var(ENV_DEPLOYMENT_NAME).is_ok()
}

fn config_dir_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clockbot").join(SETTINGS_FILE))
}

/// Locate settings: explicit path, then environment, then ./clockbot.toml,
/// then the platform config directory
pub fn resolve(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load(path);
    }

    if env_configured() {
        return Settings::from_env();
    }

    let local = Path::new(SETTINGS_FILE);
    if local.exists() {
        return Settings::load(local);
    }

    if let Some(fallback) = config_dir_file() {
        if fallback.exists() {
            return Settings::load(&fallback);
        }
    }

    Err(anyhow!(
        "No settings found: pass --settings <path>, set {}/{}/{}/{}, or create {}",
        ENV_ENDPOINT,
        ENV_API_KEY,
        ENV_PROJECT_NAME,
        ENV_DEPLOYMENT_NAME,
        SETTINGS_FILE
    ))
}
