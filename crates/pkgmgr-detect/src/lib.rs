//! Package manager detection.
//!
//! Works out which package manager a delegated command belongs to from the
//! environment: an explicit [`OVERRIDE_VAR`], then the [`USER_AGENT_VAR`]
//! that npm, pnpm, yarn and bun export to the scripts they run, then a
//! caller-supplied fallback.
//!
//! # Example
//!
//! ```
//! use pkgmgr_detect::{Detector, PackageManager};
//!
//! let env = [("npm_config_user_agent", "pnpm/8.15.0 npm/? node/v20.10.0")];
//! let pm = Detector::new(env).resolve(PackageManager::Npm);
//! assert_eq!(pm, PackageManager::Pnpm);
//! assert_eq!(pm.exec_spec().prefix, ["dlx"]);
//! ```

pub use detector::{Detector, resolve};
pub use error::{Error, Result};
pub use manager::{ExecSpec, PackageManager};
pub use resolver::{OVERRIDE_VAR, OverrideVar, PairResolver, Resolver, USER_AGENT_VAR, UserAgentVar};
pub use user_agent::UserAgent;

mod detector;
mod error;
mod manager;
mod resolver;
mod user_agent;
