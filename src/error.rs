use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes shared by every pacstall command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoInput = 66,
    Unavailable = 69,
    SoftwareError = 70,
    NoPermission = 77,
    ConfigError = 78,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Errors the configuration service knows how to report.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied reading configuration file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Invalid configuration in {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn code(&self) -> i32 {
        match self {
            ConfigError::NotFound(_) => ErrorCode::NoInput.code(),
            ConfigError::PermissionDenied(_) => ErrorCode::NoPermission.code(),
            ConfigError::Invalid { .. } => ErrorCode::ConfigError.code(),
        }
    }
}

/// Outcome of a failed configuration read.
#[derive(Error, Debug)]
pub enum ReadConfigError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown error has occurred: {0:#}")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        let path = PathBuf::from("/etc/pacstall/config.toml");

        assert_eq!(ConfigError::NotFound(path.clone()).code(), 66);
        assert_eq!(ConfigError::PermissionDenied(path.clone()).code(), 77);
        assert_eq!(
            ConfigError::Invalid {
                path,
                message: "expected `=`".to_string(),
            }
            .code(),
            78
        );
    }

    #[test]
    fn test_other_error_keeps_context() {
        let err = ReadConfigError::from(
            anyhow::anyhow!("disk on fire").context("Failed to read /etc/pacstall/config.toml"),
        );

        let message = err.to_string();
        assert!(message.contains("Failed to read"));
        assert!(message.contains("disk on fire"));
    }
}
