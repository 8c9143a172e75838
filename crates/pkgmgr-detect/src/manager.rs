//! Supported package managers and their exec commands.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Binary and leading arguments used to run a package without installing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecSpec {
    pub bin: &'static str,
    pub prefix: &'static [&'static str],
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Name of the package manager, which is also its binary.
    pub const fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    pub const fn exec_spec(self) -> ExecSpec {
        match self {
            PackageManager::Npm => ExecSpec {
                bin: "npx",
                prefix: &[],
            },
            PackageManager::Pnpm => ExecSpec {
                bin: "pnpm",
                prefix: &["dlx"],
            },
            PackageManager::Yarn => ExecSpec {
                bin: "yarn",
                prefix: &["dlx"],
            },
            PackageManager::Bun => ExecSpec {
                bin: "bunx",
                prefix: &[],
            },
        }
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    /// Exact, case-sensitive match on the name.
    fn from_str(s: &str) -> Result<Self> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s)
            .ok_or_else(|| Error::Unsupported(s.to_string()))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
