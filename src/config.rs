use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_PATH: &str = "paperfile.toml";

/// Client configuration from `paperfile.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base url of the grammar-check service.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Path of the upload endpoint, joined onto `server_url`.
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
    /// Request timeout in seconds. 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_upload_path() -> String {
    "/upload".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            upload_path: default_upload_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Full url the document is POSTed to.
    pub fn upload_endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.server_url)?.join(&self.upload_path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Load configuration from `path`.
///
/// Falls back to defaults if the file is missing.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
