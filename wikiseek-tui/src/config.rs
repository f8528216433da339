use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wikipedia's public query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Endpoint configuration stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: String,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            last_updated: chrono::Utc::now(),
        }
    }
}

/// Configuration manager for the .wikiseek directory
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a config manager rooted at ~/.wikiseek
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Self::with_dir(home_dir.join(".wikiseek"))
    }

    /// Create a config manager rooted at an explicit directory
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }
        Ok(Self { config_dir })
    }

    fn endpoint_file(&self) -> PathBuf {
        self.config_dir.join("endpoint.json")
    }

    /// Determine the endpoint to use based on priority:
    /// 1. CLI argument (highest priority)
    /// 2. Environment variable WIKISEEK_ENDPOINT
    /// 3. Saved configuration file
    /// 4. Built-in default (lowest priority)
    pub fn determine_endpoint(&self, cli_override: Option<String>) -> Result<String> {
        if let Some(endpoint) = cli_override {
            return Ok(endpoint);
        }

        if let Ok(endpoint) = std::env::var("WIKISEEK_ENDPOINT") {
            return Ok(endpoint);
        }

        if let Some(config) = self.load_endpoint_config()? {
            return Ok(config.endpoint);
        }

        Ok(DEFAULT_ENDPOINT.to_string())
    }

    /// Save endpoint configuration
    pub fn save_endpoint_config(&self, config: &EndpointConfig) -> Result<()> {
        let json =
            serde_json::to_string_pretty(config).context("Failed to serialize endpoint config")?;
        fs::write(self.endpoint_file(), json).context("Failed to write endpoint config file")?;
        Ok(())
    }

    /// Load endpoint configuration
    pub fn load_endpoint_config(&self) -> Result<Option<EndpointConfig>> {
        let config_file = self.endpoint_file();

        if !config_file.exists() {
            return Ok(None);
        }

        let json =
            fs::read_to_string(&config_file).context("Failed to read endpoint config file")?;
        let config: EndpointConfig =
            serde_json::from_str(&json).context("Failed to parse endpoint config")?;

        Ok(Some(config))
    }
}

/// Canonical article URL for a page id, derived from the query endpoint.
///
/// MediaWiki installs serve the API at `<root>/w/api.php` and articles at
/// `<root>/?curid=<id>`.
pub fn article_url(endpoint: &str, page_id: u64) -> String {
    let root = endpoint
        .trim_end_matches("/w/api.php")
        .trim_end_matches('/');
    format!("{}/?curid={}", root, page_id)
}
