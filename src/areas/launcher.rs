use crate::artifacts::translator::error::TranslateError;
use crate::artifacts::translator::resolved_command::ResolvedCommand;
use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus, Stdio};

pub const DEFAULT_PROGRAM: &str = "git";

/// Runs the underlying version-control executable.
///
/// The child inherits stdin, stdout and stderr, so whatever it prints goes
/// straight to the caller's terminal (or pipes). The launcher only waits for
/// it and reports the exit code.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: OsString,
}

impl Default for Launcher {
    fn default() -> Self {
        Launcher::new(DEFAULT_PROGRAM)
    }
}

impl Launcher {
    pub fn new(program: impl Into<OsString>) -> Self {
        Launcher {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn launch(&self, command: &ResolvedCommand) -> Result<i32, TranslateError> {
        let argv = command.argv();
        tracing::debug!(program = ?self.program, ?argv, "spawning");

        let status = Command::new(&self.program)
            .args(&argv)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| self.execution_error(source))?;

        let code = exit_code_of(status);
        tracing::debug!(%status, code, "child exited");

        Ok(code)
    }

    /// Runs `<program> --version` with captured output and returns its first line.
    ///
    /// Any failure yields `None`; the caller treats the version as optional.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .inspect_err(|err| tracing::debug!(program = ?self.program, %err, "version probe failed"))
            .ok()?;

        if !output.status.success() {
            return None;
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
    }

    fn execution_error(&self, source: std::io::Error) -> TranslateError {
        TranslateError::UnderlyingExecution {
            program: self.program.clone(),
            source,
        }
    }
}

/// The child's exit code, or `128 + signal` when it was killed by a signal.
pub fn exit_code_of(status: ExitStatus) -> i32 {
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
