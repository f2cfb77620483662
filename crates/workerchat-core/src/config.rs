use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The worker endpoint the original deployment ships with. Overridable via
/// config file or the CLI `--endpoint` flag.
pub const DEFAULT_ENDPOINT: &str = "https://gpt-oss-120b.md-yamin-hossain.workers.dev";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: EndpointSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
    /// Transport-level timeout. The session itself never imposes one.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub highlight_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: EndpointSettings {
                base_url: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: None,
                user_agent: "Workerchat/0.1".to_string(),
            },
            render: RenderSettings {
                highlight_theme: "base16-ocean.dark".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workerchat")
            .join("config.toml")
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), crate::error::ChatError> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ChatError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
