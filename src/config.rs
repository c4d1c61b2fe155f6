//! User defaults persistence
//!
//! Stores widget defaults in `~/.config/easy-edit/config.yaml`. Props built
//! with [`EasyEditProps::from_config`](crate::props::EasyEditProps::from_config)
//! start from these values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::props::{
    DEFAULT_CANCEL_LABEL, DEFAULT_DELETE_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_SAVE_LABEL,
    DEFAULT_VALIDATION_MESSAGE,
};

/// Widget defaults that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyEditConfig {
    pub placeholder: String,
    pub save_button_label: String,
    pub cancel_button_label: String,
    pub delete_button_label: String,
    pub validation_message: String,
    pub css_class_prefix: String,
}

impl Default for EasyEditConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            save_button_label: DEFAULT_SAVE_LABEL.to_string(),
            cancel_button_label: DEFAULT_CANCEL_LABEL.to_string(),
            delete_button_label: DEFAULT_DELETE_LABEL.to_string(),
            validation_message: DEFAULT_VALIDATION_MESSAGE.to_string(),
            css_class_prefix: String::new(),
        }
    }
}

impl EasyEditConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if missing or malformed
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
