use crate::error::{ConfigError, ReadConfigError};
use crate::settings::PacstallConfig;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const PACSTALL_CONFIG_PATH: &str = "/etc/pacstall/config.toml";
pub const DEFAULT_ELEVATION_HELPER: &str = "sudo";

/// Reads and validates pacstall's configuration file.
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn read_config(&self) -> Result<PacstallConfig, ReadConfigError>;
}

/// Runtime settings captured from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf,
    pub elevation_helper: String,
    pub pacstall_editor: Option<String>,
    pub editor: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = var("PACSTALL_CONFIG_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(PACSTALL_CONFIG_PATH));
        let elevation_helper = var("PACSTALL_ELEVATION_HELPER")
            .filter(|helper| !helper.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ELEVATION_HELPER.to_string());

        Self {
            config_path,
            elevation_helper,
            pacstall_editor: var("PACSTALL_EDITOR"),
            editor: var("EDITOR"),
        }
    }
}

impl ConfigSource for Config {
    async fn read_config(&self) -> Result<PacstallConfig, ReadConfigError> {
        let path = &self.config_path;

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(ConfigError::PermissionDenied(path.clone()).into());
            }
            Err(e) => {
                let e = anyhow::Error::new(e)
                    .context(format!("Failed to read {}", path.display()));
                return Err(e.into());
            }
        };

        toml::from_str(&content).map_err(|e| {
            ConfigError::Invalid {
                path: path.clone(),
                message: e.message().to_string(),
            }
            .into()
        })
    }
}
