mod types;

pub use types::*;

use crate::{Error, Result};
use secrecy::{ExposeSecret, Secret};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Environment variables that may carry the provider API key, in lookup order.
/// `GroqAPIKey` is the name older `.env` files use.
const API_KEY_VARS: [&str; 2] = ["GROQ_API_KEY", "GroqAPIKey"];

/// Loads `.env`, the YAML file named by `CONFIG_PATH` (default `config.yaml`),
/// then applies environment overrides and validates the result.
///
/// A missing default `config.yaml` is not an error; an explicitly configured
/// path that does not exist is.
pub async fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| "config.yaml".to_string());

    let mut config = match load_file(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.apply_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads and parses a YAML configuration file without applying overrides.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    Config::from_yaml_str(&config_str)
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overlays values found through `lookup` (normally the process
    /// environment) onto the file configuration.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|&var| non_empty(var)) {
            self.llm.api_key = Secret::new(key);
        }
        if let Some(model) = non_empty("LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(base_url) = non_empty("LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(host) = non_empty("HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        if let Some(name) = non_empty("Assistantname") {
            self.assistant.name = name;
        }
        if let Some(name) = non_empty("Username") {
            self.assistant.user_name = name;
        }

        Ok(())
    }

    /// Checks everything the service needs before it can become ready.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.expose_secret().trim().is_empty() {
            return Err(Error::config(format!(
                "Missing required API key: set {} or llm.api_key",
                API_KEY_VARS.join(" / ")
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(Error::config(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }
        Ok(())
    }
}
