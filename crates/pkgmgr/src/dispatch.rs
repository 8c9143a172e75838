use crate::error::{Error, Result};
use pkgmgr_detect::{Detector, PackageManager};
use pkgmgr_platform::command::{exit_code, exit_signal};
use pkgmgr_platform::{Command, EnvSource, Shell};
use std::ffi::OsString;

/// How the trailing arguments are handed to the package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `<pm> <args...>`
    Run,
    /// `<exec bin> <exec prefix...> <args...>`, e.g. `pnpm dlx <args...>`.
    Exec,
}

impl Mode {
    /// Name used to prefix diagnostics.
    pub fn tool_name(self) -> &'static str {
        match self {
            Mode::Run => "pkgmgr",
            Mode::Exec => "pkgmgrx",
        }
    }

    /// Build the command for `pm`. Exec mode needs at least one argument.
    pub fn plan(self, pm: PackageManager, args: Vec<OsString>) -> Result<Command> {
        match self {
            Mode::Run => Ok(Command::new(pm.as_str()).args(args)),
            Mode::Exec => {
                if args.is_empty() {
                    return Err(Error::MissingCommand);
                }
                let spec = pm.exec_spec();
                Ok(Command::new(spec.bin).args(spec.prefix).args(args))
            }
        }
    }
}

/// Resolve the package manager from `env`, launch it with `args` and wait.
///
/// Returns the exit code to leave with. A child without a numeric exit code
/// (killed by a signal) maps to `0`.
pub fn try_run<E: EnvSource>(
    mode: Mode,
    fallback: PackageManager,
    env: E,
    args: Vec<OsString>,
) -> Result<i32> {
    let pm = Detector::new(env).resolve(fallback);
    tracing::debug!("resolved {pm}");

    let cmd = mode.plan(pm, args)?.run_in_shell(Shell::host());
    let status = cmd.status()?;

    match exit_code(status) {
        Some(code) => Ok(code),
        None => {
            tracing::warn!(
                signal = ?exit_signal(status),
                "{} exited without a status code",
                cmd.program()
            );
            Ok(0)
        }
    }
}
