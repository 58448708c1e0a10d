use crate::formatter::DEFAULT_MARKER;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Marker shown next to the current location in listings.
    pub marker: String,
    /// Highlight the current location in listings.
    pub color: bool,
    /// Ask before `dirs -c` clears the history.
    pub confirm_clear: bool,
    /// Prompt template, `{cwd}` is replaced by the current location.
    pub prompt: String,
    /// File to write logs to.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            color: true,
            confirm_clear: true,
            prompt: "{cwd}> ".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the specified path, the default config dir (~/.config/dirhist/) or a local .dirhist.toml.
    pub fn load(path: &Option<String>) -> Self {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_path()
        };
        Self::load_from_path(&config_path)
    }

    fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring invalid config {:?}: {}", config_path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Renders the prompt for the given location.
    pub fn prompt_for(&self, cwd: &str) -> String {
        self.prompt.replace("{cwd}", cwd)
    }

    fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("dirhist").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .dirhist.toml (might not exist)
        PathBuf::from(".dirhist.toml")
    }
}
