//! Run the package manager that invoked you.
//!
//! `pkgmgr` forwards its arguments to npm, pnpm, yarn or bun, whichever the
//! environment says is in charge. `pkgmgrx` does the same for the "run a
//! package without installing it" command of each (`npx`, `pnpm dlx`,
//! `yarn dlx`, `bunx`).
//!
//! # Usage
//!
//! A binary only has to pick a [`Mode`] and a fallback and hand over to [`run()`].

pub use dispatch::{Mode, try_run};
pub use error::{Error, Result};
pub use logging::LOG_VAR;
pub use pkgmgr_detect::PackageManager;

mod dispatch;
mod error;
pub mod logging;

use pkgmgr_platform::ProcessEnv;
use std::{env, process};

/// Dispatch with the process arguments and environment, then exit.
///
/// Exits with the child's code, or `1` after printing a diagnostic when the
/// child could not be started.
pub fn run(mode: Mode, fallback: PackageManager) -> ! {
    logging::init();

    let args = env::args_os().skip(1).collect();
    match try_run(mode, fallback, ProcessEnv, args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{}: {err}", mode.tool_name());
            process::exit(1)
        }
    }
}
