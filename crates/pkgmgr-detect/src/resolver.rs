//! Resolver abstraction for package manager detection.
//!
//! Each environment signal is a [`Resolver`]. Signals are tried in priority
//! order by chaining them with [`PairResolver`]; the caller supplies the
//! fallback once the chain comes up empty.

use crate::manager::PackageManager;
use crate::user_agent::UserAgent;
use pkgmgr_platform::EnvSource;

/// Environment variable that forces a package manager.
pub const OVERRIDE_VAR: &str = "PKGMGR";

/// Environment variable package managers set for the scripts they run.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

pub trait Resolver {
    fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<PackageManager>;
}

#[derive(Clone)]
pub struct PairResolver<R1, R2> {
    primary: R1,
    fallback: R2,
}

impl<R1, R2> PairResolver<R1, R2>
where
    R1: Resolver,
    R2: Resolver,
{
    pub fn new(primary: R1, fallback: R2) -> Self {
        Self { primary, fallback }
    }
}

impl<R1, R2> Resolver for PairResolver<R1, R2>
where
    R1: Resolver,
    R2: Resolver,
{
    fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<PackageManager> {
        self.primary
            .resolve(env)
            .or_else(|| self.fallback.resolve(env))
    }
}

/// Reads [`OVERRIDE_VAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideVar;

impl Resolver for OverrideVar {
    fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<PackageManager> {
        let value = env.var(OVERRIDE_VAR)?;
        match value.parse() {
            Ok(pm) => Some(pm),
            Err(err) => {
                tracing::debug!("ignoring {OVERRIDE_VAR}: {err}");
                None
            }
        }
    }
}

/// Reads the tool name from [`USER_AGENT_VAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAgentVar;

impl Resolver for UserAgentVar {
    fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<PackageManager> {
        let raw = env.var(USER_AGENT_VAR)?;
        let Some(ua) = UserAgent::parse(&raw) else {
            tracing::debug!("ignoring malformed {USER_AGENT_VAR}: {raw:?}");
            return None;
        };
        match ua.name.parse() {
            Ok(pm) => {
                tracing::debug!(version = ua.version, "{USER_AGENT_VAR} names {pm}");
                Some(pm)
            }
            Err(err) => {
                tracing::debug!("ignoring {USER_AGENT_VAR}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockResolver(Option<PackageManager>);

    impl Resolver for MockResolver {
        fn resolve<E: EnvSource + ?Sized>(&self, _env: &E) -> Option<PackageManager> {
            self.0
        }
    }

    const EMPTY: [(&str, &str); 0] = [];

    #[test]
    fn test_pair_resolver_prefers_primary() {
        let resolver = PairResolver::new(
            MockResolver(Some(PackageManager::Yarn)),
            MockResolver(Some(PackageManager::Bun)),
        );
        assert_eq!(resolver.resolve(&EMPTY), Some(PackageManager::Yarn));
    }

    #[test]
    fn test_pair_resolver_fallback() {
        let resolver = PairResolver::new(MockResolver(None), MockResolver(Some(PackageManager::Bun)));
        assert_eq!(resolver.resolve(&EMPTY), Some(PackageManager::Bun));

        let resolver = PairResolver::new(MockResolver(None), MockResolver(None));
        assert_eq!(resolver.resolve(&EMPTY), None);
    }

    #[test]
    fn test_override_var() {
        assert_eq!(OverrideVar.resolve(&[("PKGMGR", "bun")]), Some(PackageManager::Bun));
        assert_eq!(OverrideVar.resolve(&[("PKGMGR", "unsupported")]), None);
        assert_eq!(OverrideVar.resolve(&[("PKGMGR", "")]), None);
        assert_eq!(OverrideVar.resolve(&EMPTY), None);
    }

    #[test]
    fn test_user_agent_var() {
        let env = [("npm_config_user_agent", "yarn/4.0.0 npm/? node/v20.10.0")];
        assert_eq!(UserAgentVar.resolve(&env), Some(PackageManager::Yarn));
        assert_eq!(
            UserAgentVar.resolve(&[("npm_config_user_agent", "unknown/1.0.0 node/v20.0.0")]),
            None
        );
        assert_eq!(
            UserAgentVar.resolve(&[("npm_config_user_agent", "malformed-string")]),
            None
        );
        assert_eq!(UserAgentVar.resolve(&EMPTY), None);
    }

    #[test]
    fn test_user_agent_ignores_override() {
        assert_eq!(UserAgentVar.resolve(&[("PKGMGR", "pnpm")]), None);
    }
}
