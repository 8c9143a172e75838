//! Platform helpers for pkgmgr.
//!
//! Environment lookup goes through [`EnvSource`] so callers can swap the real
//! process environment for a fixed map. [`Command`] launches a child with the
//! parent's standard streams, optionally wrapped in the host [`Shell`].

pub use command::Command;
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use shell::Shell;

pub mod command;
pub mod env;
mod error;
pub mod shell;
