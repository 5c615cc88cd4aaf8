use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path prefix of every REST endpoint, appended to `api.base_url`.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL with the API prefix applied, without a trailing slash.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PREFIX)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Maximum number of featured projects (and, separately, videos) the
    /// backend accepts.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    #[serde(default = "default_published_limit")]
    pub published_limit: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            featured_limit: default_featured_limit(),
            published_limit: default_published_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_featured_limit() -> u32 {
    3
}

fn default_published_limit() -> u32 {
    100
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("api.base_url '{}' is not a valid URL", self.api.base_url))?;
        if self.console.page_size == 0 {
            anyhow::bail!("console.page_size must be greater than 0");
        }
        if self.console.page_size > 100 {
            anyhow::bail!("console.page_size must be 100 or less");
        }
        if self.console.featured_limit == 0 {
            anyhow::bail!("console.featured_limit must be greater than 0");
        }
        if self.console.published_limit == 0 {
            anyhow::bail!("console.published_limit must be greater than 0");
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["api", "base_url"] => Some(self.api.base_url.clone()),
            ["console", "page_size"] => Some(self.console.page_size.to_string()),
            ["console", "featured_limit"] => Some(self.console.featured_limit.to_string()),
            ["console", "published_limit"] => Some(self.console.published_limit.to_string()),
            _ => None,
        }
    }

    /// Set a key and re-validate. The previous value is restored when the new
    /// one is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.clone();
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["api", "base_url"] => self.api.base_url = value.to_string(),
            ["console", "page_size"] => {
                self.console.page_size = value.parse().context("Invalid number")?
            }
            ["console", "featured_limit"] => {
                self.console.featured_limit = value.parse().context("Invalid number")?
            }
            ["console", "published_limit"] => {
                self.console.published_limit = value.parse().context("Invalid number")?
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        if let Err(e) = self.validate() {
            *self = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            ("api.base_url".to_string(), self.api.base_url.clone()),
            (
                "console.page_size".to_string(),
                self.console.page_size.to_string(),
            ),
            (
                "console.featured_limit".to_string(),
                self.console.featured_limit.to_string(),
            ),
            (
                "console.published_limit".to_string(),
                self.console.published_limit.to_string(),
            ),
        ]
    }
}
