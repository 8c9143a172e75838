use crate::manager::PackageManager;
use crate::resolver::{OverrideVar, PairResolver, Resolver, UserAgentVar};
use pkgmgr_platform::{EnvSource, ProcessEnv};

/// Resolves the package manager from an environment.
///
/// [`OVERRIDE_VAR`](crate::OVERRIDE_VAR) wins over
/// [`USER_AGENT_VAR`](crate::USER_AGENT_VAR); when neither names a supported
/// package manager the caller's fallback is returned.
#[derive(Debug, Clone)]
pub struct Detector<E> {
    env: E,
}

impl Detector<ProcessEnv> {
    pub fn from_process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> Detector<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn resolve(&self, fallback: PackageManager) -> PackageManager {
        let signals = PairResolver::new(OverrideVar, UserAgentVar);
        match signals.resolve(&self.env) {
            Some(pm) => pm,
            None => {
                tracing::debug!("no environment signal, falling back to {fallback}");
                fallback
            }
        }
    }
}

/// Resolve against the current process environment.
pub fn resolve(fallback: PackageManager) -> PackageManager {
    Detector::from_process().resolve(fallback)
}
