use crate::error::{Error, Result};
use crate::shell::Shell;
use std::ffi::{OsStr, OsString};
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Builder for a child process that shares the parent's standard streams.
#[derive(Debug, Clone)]
pub struct Command {
    program: String,
    args: Vec<OsString>,
    shell: Option<Shell>,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            shell: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Route the launch through `shell`, or launch directly when `None`.
    pub fn run_in_shell(mut self, shell: Option<Shell>) -> Self {
        self.shell = shell;
        self
    }

    /// Program and arguments joined by single spaces, unquoted.
    pub fn command_line(&self) -> OsString {
        let mut line = OsString::from(&self.program);
        for arg in &self.args {
            line.push(" ");
            line.push(arg);
        }
        line
    }

    fn build(&self) -> StdCommand {
        let mut inner = match self.shell {
            None => {
                let mut inner = StdCommand::new(&self.program);
                inner.args(&self.args);
                inner
            }
            Some(shell) => {
                let mut inner = StdCommand::new(shell.executable());
                inner.args(shell.flags());
                push_script(&mut inner, self.command_line());
                inner
            }
        };
        inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        inner
    }

    /// Spawn the child and block until it exits.
    pub fn status(&self) -> Result<ExitStatus> {
        tracing::debug!(program = %self.program, args = ?self.args, shell = ?self.shell, "spawning");
        self.build().status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(windows)]
fn push_script(inner: &mut StdCommand, script: OsString) {
    use std::os::windows::process::CommandExt;

    let mut quoted = OsString::from("\"");
    quoted.push(script);
    quoted.push("\"");
    inner.raw_arg(quoted);
}

#[cfg(not(windows))]
fn push_script(inner: &mut StdCommand, script: OsString) {
    inner.arg(script);
}

/// Numeric exit code of a finished child, or `None` if it was killed.
pub fn exit_code(status: ExitStatus) -> Option<i32> {
    status.code()
}

/// Signal that terminated a child, when the platform reports one.
#[cfg(unix)]
pub fn exit_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
pub fn exit_signal(_status: ExitStatus) -> Option<i32> {
    None
}
