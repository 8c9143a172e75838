//! Read-only environment access.

use std::collections::HashMap;
use std::env;

/// A source of environment variables.
///
/// Values that are absent or not valid unicode are reported as `None`.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_env_lookup() {
        let env = [("A", "1"), ("B", "2")];
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B").as_deref(), Some("2"));
        assert_eq!(env.var("C"), None);
    }

    #[test]
    fn test_array_env_last_entry_wins() {
        let env = [("A", "1"), ("A", "2")];
        assert_eq!(env.var("A").as_deref(), Some("2"));
    }

    #[test]
    fn test_array_env_keeps_empty_value() {
        let env = [("A", "")];
        assert_eq!(env.var("A").as_deref(), Some(""));
    }

    #[test]
    fn test_hashmap_env_lookup() {
        let mut env = HashMap::new();
        env.insert("KEY".to_string(), "value".to_string());
        assert_eq!(env.var("KEY").as_deref(), Some("value"));
        assert_eq!(env.var("key"), None);
    }

    #[test]
    fn test_env_through_reference() {
        fn lookup(env: impl EnvSource) -> Option<String> {
            env.var("A")
        }
        let env = [("A", "1")];
        assert_eq!(lookup(&env).as_deref(), Some("1"));
    }

    #[test]
    fn test_process_env_missing_var() {
        assert_eq!(ProcessEnv.var("PKGMGR_PLATFORM_SURELY_UNSET_12345"), None);
    }
}
