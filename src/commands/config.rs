use super::utils::{CommandRunner, SystemRunner};
use crate::config::{Config, ConfigSource};
use crate::error::{ErrorCode, ReadConfigError};
use log::{debug, error};

pub const FALLBACK_EDITOR: &str = "sensible-editor";

/// Picks the editor to launch: `settings.editor` > `$PACSTALL_EDITOR` > `$EDITOR` > `sensible-editor`.
///
/// Blank values are treated as unset.
pub fn resolve_editor(
    config_editor: Option<&str>,
    pacstall_editor: Option<&str>,
    editor: Option<&str>,
) -> String {
    [config_editor, pacstall_editor, editor]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or(FALLBACK_EDITOR)
        .to_string()
}

pub async fn config() -> i32 {
    let config = Config::new();
    open_editor(&config, &config, &SystemRunner).await
}

/// Opens `config.toml` in an editor with elevated privileges, then validates it.
///
/// Returns the editor's exit code if it exits non-zero, the configuration
/// error's code if the edited file does not load, and `0` otherwise.
pub async fn open_editor<S, R>(config: &Config, source: &S, runner: &R) -> i32
where
    S: ConfigSource,
    R: CommandRunner,
{
    // A broken config must still be editable, so read failures here only
    // drop the configured editor.
    let config_editor = match source.read_config().await {
        Ok(conf) => conf.settings.editor,
        Err(ReadConfigError::Config(e)) => {
            debug!("Ignoring configuration error before editing: {e}");
            None
        }
        Err(e) => {
            error!("{e}");
            None
        }
    };

    let editor = resolve_editor(
        config_editor.as_deref(),
        config.pacstall_editor.as_deref(),
        config.editor.as_deref(),
    );
    let argv = vec![
        config.elevation_helper.clone(),
        editor.clone(),
        config.config_path.to_string_lossy().into_owned(),
    ];

    let ret_code = match runner.run(&argv) {
        Ok(code) => code,
        Err(e) => {
            error!("Failed to launch '{}': {e}", config.elevation_helper);
            return ErrorCode::Unavailable.code();
        }
    };

    if ret_code != 0 {
        error!("Editor '{editor}' closed with a non-zero exit code {ret_code}");
        return ret_code;
    }

    match source.read_config().await {
        Ok(_) => {
            debug!("{} is valid", config.config_path.display());
            0
        }
        Err(ReadConfigError::Config(e)) => {
            error!("{e}");
            e.code()
        }
        Err(e) => {
            error!("{e}");
            ErrorCode::SoftwareError.code()
        }
    }
}
