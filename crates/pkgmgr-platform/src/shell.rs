//! Command shell used to start children on hosts that need one.

use std::env;
use std::ffi::OsString;

/// Shells a [`Command`](crate::Command) can be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// The Windows command interpreter.
    Cmd,
}

impl Shell {
    /// The shell package-manager binaries must be started through on this host.
    ///
    /// On Windows `npm`, `pnpm` and friends are `.cmd` wrappers that cannot be
    /// spawned directly, so they go through `cmd.exe`. Everywhere else the
    /// binary is executed as is.
    pub fn host() -> Option<Shell> {
        if cfg!(windows) { Some(Shell::Cmd) } else { None }
    }

    /// Interpreter to launch, honoring `%ComSpec%`.
    pub fn executable(self) -> OsString {
        match self {
            Shell::Cmd => env::var_os("ComSpec").unwrap_or_else(|| OsString::from("cmd.exe")),
        }
    }

    /// Flags placed before the command line.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Shell::Cmd => &["/d", "/s", "/c"],
        }
    }
}
