use log::debug;
use std::io;
use std::process::{Command, ExitStatus};

/// Runs an argument list to completion and yields its exit code.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32>;
}

/// Spawns real processes with the caller's stdio attached.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

        debug!("Running {argv:?}");
        let status = Command::new(program).args(args).status()?;

        Ok(exit_code(status))
    }
}

/// Exit code of a finished process, using `128 + signal` when it was killed.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let err = SystemRunner.run(&[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_program_fails_to_spawn() {
        let result = SystemRunner.run(&argv(&["pacstall-definitely-not-a-real-binary"]));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_codes_are_passed_through() {
        assert_eq!(SystemRunner.run(&argv(&["true"])).unwrap(), 0);
        assert_eq!(SystemRunner.run(&argv(&["sh", "-c", "exit 3"])).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_maps_to_shell_convention() {
        let code = SystemRunner
            .run(&argv(&["sh", "-c", "kill -TERM $$"]))
            .unwrap();
        assert_eq!(code, 128 + 15);
    }
}
