use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Environment variable that overrides the stored Groq credential.
pub const API_KEY_ENV: &str = "HERALD_GROQ_API_KEY";

const CONFIG_FILE_NAME: &str = "config.json";

/// The on-disk configuration, persisted as pretty JSON under the user's
/// config directory. A missing file reads as all-defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    pub groq_api_key: Option<String>,
    pub groq_model: Option<String>,
    pub api_base_url: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| AppError::Configuration(format!("invalid config file: {err}"))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to encode config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

/// Resolved runtime configuration. `None` values fall back to the client's
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Ok(Self::resolve(StoredConfig::load()?))
    }

    /// The environment credential wins over the stored one; blank environment
    /// values count as unset.
    pub fn resolve(stored: StoredConfig) -> Self {
        let env_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key: env_key.or(stored.groq_api_key),
            model: stored.groq_model,
            api_base_url: stored.api_base_url,
        }
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        AppError::Configuration("could not determine the user config directory".to_string())
    })?;
    Ok(base.join("herald"))
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}
