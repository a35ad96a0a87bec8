//! Process environment access
//!
//! Resolvers take their environment through [`EnvSource`] instead of
//! reading `std::env` directly, so tests can hand in a plain `HashMap`
//! without mutating process-global state.

use std::collections::HashMap;

use crate::compat::Namespace;

/// Read-only view of the process environment
pub trait EnvSource {
    /// Look up a variable; `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// First trimmed non-empty value of `suffix`-named variables across the
/// given generations, highest precedence first. A variable that is set but
/// blank falls through to the next generation.
pub fn first_override(
    env: &dyn EnvSource,
    generations: &[&Namespace],
    suffix: &str,
) -> Option<String> {
    generations.iter().find_map(|ns| {
        env.var(&ns.env_key(suffix)).and_then(|raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    })
}
