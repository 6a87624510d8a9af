use serde::{Deserialize, Serialize};

/// Contents of pacstall's `config.toml`.
///
/// ```toml
/// [settings]
/// editor = "nvim"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PacstallConfig {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred editor for `pacstall config`
    pub editor: Option<String>,
}
