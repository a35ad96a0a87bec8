//! Configuration paths
//!
//! Resolves the state directory, config file, OAuth credential store, and
//! gateway lock directory, honoring overrides and on-disk remnants from
//! all three product names. Precedence is always: current-name environment
//! override, legacy-name overrides, existing files/directories on disk,
//! computed default. Every resolver is total; filesystem probe failures
//! count as "does not exist".
//!
//! Each `resolve_*` function takes its inputs explicitly; the short-named
//! wrappers (`state_dir()`, `config_path()`, ...) read the live process
//! environment.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::compat::{
    CURRENT, ENV_GENERATIONS, LEGACY_1, LEGACY_2, LEGACY_CONFIG_FILENAMES,
    LEGACY_STATE_DIRNAMES, OVERRIDE_PAIR, PROJECT_NAME,
};
use crate::config::types::Config;
use crate::env::{first_override, EnvSource, ProcessEnv};

/// Port the gateway binds when nothing overrides it
pub const DEFAULT_GATEWAY_PORT: u16 = 18789;

const CREDENTIALS_DIRNAME: &str = "credentials";
const OAUTH_FILENAME: &str = "oauth.json";

fn process_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Expand a user-supplied path: a leading `~` (alone or followed by a
/// separator) becomes the home directory, anything else is resolved
/// against the current directory. Blank input stays blank. `~foo` has no
/// user-lookup meaning here and is treated as a literal relative path.
pub fn resolve_user_path(input: &str, home: &Path) -> PathBuf {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PathBuf::new();
    }
    if let Some(rest) = trimmed.strip_prefix('~') {
        if rest.is_empty() {
            return absolutize(home);
        }
        if rest.starts_with(['/', '\\']) {
            let relative = rest.trim_start_matches(['/', '\\']);
            return absolutize(&home.join(relative));
        }
    }
    absolutize(Path::new(trimmed))
}

/// The current-name state directory, `~/.tessa`, whether or not it exists.
pub fn resolve_new_state_dir(home: &Path) -> PathBuf {
    home.join(CURRENT.dot_dir)
}

/// The most-legacy state directory, `~/.clawdbot`, kept for old call sites.
pub fn resolve_legacy_state_dir(home: &Path) -> PathBuf {
    home.join(LEGACY_2.dot_dir)
}

/// Every legacy state directory in scan order, for exhaustive migration
/// sweeps. Includes the historical `.moldbot` variant that never shipped
/// as a primary name.
pub fn resolve_legacy_state_dirs(home: &Path) -> Vec<PathBuf> {
    LEGACY_STATE_DIRNAMES
        .iter()
        .map(|dirname| home.join(dirname))
        .collect()
}

/// State directory for mutable data (sessions, logs, credentials).
///
/// Override via `TESSA_STATE_DIR` (preferred), `MOLTBOT_STATE_DIR`, or
/// `CLAWDBOT_STATE_DIR`. Without an override the first existing of
/// `~/.tessa`, `~/.moltbot`, `~/.clawdbot` wins; a fresh install gets
/// `~/.tessa` even though it does not exist yet. Callers create it.
pub fn resolve_state_dir(env: &dyn EnvSource, home: &Path) -> PathBuf {
    if let Some(override_dir) = first_override(env, &ENV_GENERATIONS, "STATE_DIR") {
        return resolve_user_path(&override_dir, home);
    }
    let new_dir = resolve_new_state_dir(home);
    if new_dir.exists() {
        return new_dir;
    }
    for dirname in [LEGACY_1.dot_dir, LEGACY_2.dot_dir] {
        let dir = home.join(dirname);
        if dir.exists() {
            debug!(dir = %dir.display(), "using legacy state directory");
            return dir;
        }
    }
    new_dir
}

/// Canonical config file path: the `*_CONFIG_PATH` override if set, else
/// `{state_dir}/tessa.json`.
pub fn resolve_canonical_config_path(
    env: &dyn EnvSource,
    home: &Path,
    state_dir: &Path,
) -> PathBuf {
    if let Some(override_path) = first_override(env, &ENV_GENERATIONS, "CONFIG_PATH") {
        return resolve_user_path(&override_path, home);
    }
    state_dir.join(CURRENT.config_file)
}

fn push_config_filenames(candidates: &mut Vec<PathBuf>, dir: &Path) {
    candidates.push(dir.join(CURRENT.config_file));
    for filename in LEGACY_CONFIG_FILENAMES {
        candidates.push(dir.join(filename));
    }
}

/// Build the ordered list of config file candidates without touching disk.
///
/// An explicit `*_CONFIG_PATH` override short-circuits to a single entry.
/// Otherwise every explicitly set `*_STATE_DIR` override contributes the
/// current filename plus the three legacy filenames under its directory,
/// followed by the same four filenames under the default new and legacy
/// state directories.
pub fn resolve_default_config_candidates(env: &dyn EnvSource, home: &Path) -> Vec<PathBuf> {
    if let Some(explicit) = first_override(env, &ENV_GENERATIONS, "CONFIG_PATH") {
        return vec![resolve_user_path(&explicit, home)];
    }

    let mut candidates = Vec::new();
    for ns in ENV_GENERATIONS {
        if let Some(dir) = first_override(env, &[ns], "STATE_DIR") {
            push_config_filenames(&mut candidates, &resolve_user_path(&dir, home));
        }
    }
    push_config_filenames(&mut candidates, &resolve_new_state_dir(home));
    for dir in resolve_legacy_state_dirs(home) {
        push_config_filenames(&mut candidates, &dir);
    }
    candidates
}

/// First existing config candidate, else the canonical path under the
/// resolved state directory.
pub fn resolve_config_path_candidate(env: &dyn EnvSource, home: &Path) -> PathBuf {
    let candidates = resolve_default_config_candidates(env, home);
    if let Some(existing) = candidates.into_iter().find(|candidate| candidate.exists()) {
        debug!(path = %existing.display(), "found existing config file");
        return existing;
    }
    resolve_canonical_config_path(env, home, &resolve_state_dir(env, home))
}

/// Active config path when the caller already holds a state directory.
///
/// Override wins; then the first of the four known filenames that exists
/// under `state_dir`; then the canonical path is forced if a `*_STATE_DIR`
/// override selected that directory. Only when `state_dir` is the default
/// resolved directory does the search widen to the global candidate list.
pub fn resolve_config_path(env: &dyn EnvSource, state_dir: &Path, home: &Path) -> PathBuf {
    if let Some(override_path) = first_override(env, &ENV_GENERATIONS, "CONFIG_PATH") {
        return resolve_user_path(&override_path, home);
    }
    let mut candidates = vec![state_dir.join(CURRENT.config_file)];
    for filename in LEGACY_CONFIG_FILENAMES {
        candidates.push(state_dir.join(filename));
    }
    if let Some(existing) = candidates.into_iter().find(|candidate| candidate.exists()) {
        return existing;
    }
    if first_override(env, &ENV_GENERATIONS, "STATE_DIR").is_some() {
        return state_dir.join(CURRENT.config_file);
    }
    if absolutize(state_dir) == absolutize(&resolve_state_dir(env, home)) {
        return resolve_config_path_candidate(env, home);
    }
    state_dir.join(CURRENT.config_file)
}

/// OAuth credentials directory.
///
/// Override via `TESSA_OAUTH_DIR` or `CLAWDBOT_OAUTH_DIR`; the `MOLTBOT_*`
/// namespace never carried this variable and is not consulted. Default is
/// `{state_dir}/credentials`.
pub fn resolve_oauth_dir(env: &dyn EnvSource, home: &Path, state_dir: &Path) -> PathBuf {
    if let Some(override_dir) = first_override(env, &OVERRIDE_PAIR, "OAUTH_DIR") {
        return resolve_user_path(&override_dir, home);
    }
    state_dir.join(CREDENTIALS_DIRNAME)
}

/// Path of the OAuth credential file inside the OAuth directory.
pub fn resolve_oauth_path(env: &dyn EnvSource, home: &Path, state_dir: &Path) -> PathBuf {
    resolve_oauth_dir(env, home, state_dir).join(OAUTH_FILENAME)
}

#[cfg(unix)]
fn current_uid() -> Option<u32> {
    // SAFETY: getuid cannot fail and touches no memory.
    Some(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
fn current_uid() -> Option<u32> {
    None
}

/// Gateway lock directory (ephemeral): `{tmp}/tessa-{uid}`, or `{tmp}/tessa`
/// on hosts without a numeric user id.
pub fn resolve_gateway_lock_dir(tmp: &Path) -> PathBuf {
    match current_uid() {
        Some(uid) => tmp.join(format!("{PROJECT_NAME}-{uid}")),
        None => tmp.join(PROJECT_NAME),
    }
}

/// Effective gateway port.
///
/// `TESSA_GATEWAY_PORT` or `CLAWDBOT_GATEWAY_PORT` wins when it parses to a
/// strictly positive port; a non-numeric or non-positive value falls
/// through to `gateway.port` from the config, then to
/// [`DEFAULT_GATEWAY_PORT`].
pub fn resolve_gateway_port(cfg: Option<&Config>, env: &dyn EnvSource) -> u16 {
    if let Some(raw) = first_override(env, &OVERRIDE_PAIR, "GATEWAY_PORT") {
        if let Ok(port) = raw.parse::<u16>() {
            if port > 0 {
                return port;
            }
        }
    }
    if let Some(port) = cfg.and_then(|c| c.gateway.port) {
        if port > 0 {
            return port;
        }
    }
    DEFAULT_GATEWAY_PORT
}

/// Nix mode: the gateway runs under Nix, auto-install flows are suppressed,
/// and missing dependencies get Nix-specific error messages. True iff
/// `TESSA_NIX_MODE` or `CLAWDBOT_NIX_MODE` is exactly `"1"` (no trimming).
pub fn resolve_is_nix_mode(env: &dyn EnvSource) -> bool {
    OVERRIDE_PAIR
        .iter()
        .any(|ns| env.var(&ns.env_key("NIX_MODE")).as_deref() == Some("1"))
}

/// Get the state directory from the live process environment
pub fn state_dir() -> PathBuf {
    resolve_state_dir(&ProcessEnv, &process_home())
}

/// Get the active config file path from the live process environment
pub fn config_path() -> PathBuf {
    resolve_config_path_candidate(&ProcessEnv, &process_home())
}

/// Get the OAuth credential file path from the live process environment
pub fn oauth_path() -> PathBuf {
    let home = process_home();
    let state = resolve_state_dir(&ProcessEnv, &home);
    resolve_oauth_path(&ProcessEnv, &home, &state)
}

/// Get the gateway lock directory under the system tmp directory
pub fn gateway_lock_dir() -> PathBuf {
    resolve_gateway_lock_dir(&std::env::temp_dir())
}

/// Get the effective gateway port from the live process environment
pub fn gateway_port(cfg: Option<&Config>) -> u16 {
    resolve_gateway_port(cfg, &ProcessEnv)
}

/// Whether the process runs in Nix mode
pub fn is_nix_mode() -> bool {
    resolve_is_nix_mode(&ProcessEnv)
}

/// Point-in-time capture of every resolved location.
///
/// Resolution is re-run on every call to the functions above; callers that
/// want one consistent view (for display, or to avoid re-probing the disk)
/// take a snapshot instead of caching globals.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// State directory for mutable data
    pub state_dir: PathBuf,
    /// Active config file path
    pub config_path: PathBuf,
    /// OAuth credentials directory
    pub oauth_dir: PathBuf,
    /// OAuth credential file
    pub oauth_path: PathBuf,
    /// Gateway lock directory
    pub gateway_lock_dir: PathBuf,
}

impl ResolvedPaths {
    /// Capture from the live process environment
    pub fn capture() -> Self {
        Self::capture_with(&ProcessEnv, &process_home(), &std::env::temp_dir())
    }

    /// Capture from explicit inputs
    pub fn capture_with(env: &dyn EnvSource, home: &Path, tmp: &Path) -> Self {
        let state_dir = resolve_state_dir(env, home);
        let config_path = resolve_config_path_candidate(env, home);
        let oauth_dir = resolve_oauth_dir(env, home, &state_dir);
        let oauth_path = oauth_dir.join(OAUTH_FILENAME);
        ResolvedPaths {
            state_dir,
            config_path,
            oauth_dir,
            oauth_path,
            gateway_lock_dir: resolve_gateway_lock_dir(tmp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::GatewayConfig;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn empty_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_user_path_expands_tilde() {
        let home = tempdir().unwrap();
        let resolved = resolve_user_path("~/foo/bar", home.path());
        assert_eq!(resolved, home.path().join("foo/bar"));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_user_path_bare_tilde_is_home() {
        let home = tempdir().unwrap();
        assert_eq!(resolve_user_path("~", home.path()), home.path());
        assert_eq!(resolve_user_path("  ~  ", home.path()), home.path());
    }

    #[test]
    fn test_user_path_tilde_prefix_word_is_literal() {
        let home = tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_user_path("~bar", home.path()), cwd.join("~bar"));
    }

    #[test]
    fn test_user_path_blank_stays_blank() {
        let home = tempdir().unwrap();
        assert_eq!(resolve_user_path("   ", home.path()), PathBuf::new());
    }

    #[test]
    fn test_user_path_relative_resolves_against_cwd() {
        let home = tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_user_path("sub/dir", home.path()), cwd.join("sub/dir"));
    }

    #[test]
    fn test_state_dir_defaults_to_new_dir_on_fresh_host() {
        let home = tempdir().unwrap();
        assert_eq!(
            resolve_state_dir(&empty_env(), home.path()),
            home.path().join(".tessa")
        );
    }

    #[test]
    fn test_state_dir_falls_back_to_existing_legacy_dir() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(".clawdbot")).unwrap();
        assert_eq!(
            resolve_state_dir(&empty_env(), home.path()),
            home.path().join(".clawdbot")
        );
    }

    #[test]
    fn test_state_dir_prefers_new_dir_over_legacy() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(".clawdbot")).unwrap();
        std::fs::create_dir(home.path().join(".tessa")).unwrap();
        assert_eq!(
            resolve_state_dir(&empty_env(), home.path()),
            home.path().join(".tessa")
        );
    }

    #[test]
    fn test_state_dir_prefers_moltbot_over_clawdbot() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(".clawdbot")).unwrap();
        std::fs::create_dir(home.path().join(".moltbot")).unwrap();
        assert_eq!(
            resolve_state_dir(&empty_env(), home.path()),
            home.path().join(".moltbot")
        );
    }

    #[test]
    fn test_state_dir_env_override_beats_existing_dirs() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(".tessa")).unwrap();
        let env = env_of(&[("TESSA_STATE_DIR", "/custom/state")]);
        assert_eq!(
            resolve_state_dir(&env, home.path()),
            PathBuf::from("/custom/state")
        );
    }

    #[test]
    fn test_state_dir_override_expands_tilde() {
        let home = tempdir().unwrap();
        let env = env_of(&[("CLAWDBOT_STATE_DIR", "~/nested")]);
        assert_eq!(
            resolve_state_dir(&env, home.path()),
            home.path().join("nested")
        );
    }

    #[test]
    fn test_legacy_state_dirs_scan_order() {
        let home = tempdir().unwrap();
        assert_eq!(
            resolve_legacy_state_dirs(home.path()),
            vec![
                home.path().join(".clawdbot"),
                home.path().join(".moltbot"),
                home.path().join(".moldbot"),
            ]
        );
        assert_eq!(
            resolve_legacy_state_dir(home.path()),
            home.path().join(".clawdbot")
        );
    }

    #[test]
    fn test_canonical_config_path_default() {
        let home = tempdir().unwrap();
        let state = home.path().join(".tessa");
        assert_eq!(
            resolve_canonical_config_path(&empty_env(), home.path(), &state),
            state.join("tessa.json")
        );
    }

    #[test]
    fn test_canonical_config_path_override() {
        let home = tempdir().unwrap();
        let state = home.path().join(".tessa");
        let env = env_of(&[("MOLTBOT_CONFIG_PATH", "/etc/tessa/config.json")]);
        assert_eq!(
            resolve_canonical_config_path(&env, home.path(), &state),
            PathBuf::from("/etc/tessa/config.json")
        );
    }

    #[test]
    fn test_candidates_explicit_override_is_singleton() {
        let home = tempdir().unwrap();
        let env = env_of(&[
            ("TESSA_CONFIG_PATH", "/x/y.json"),
            ("TESSA_STATE_DIR", "/ignored"),
        ]);
        assert_eq!(
            resolve_default_config_candidates(&env, home.path()),
            vec![PathBuf::from("/x/y.json")]
        );
    }

    #[test]
    fn test_candidates_default_layout() {
        let home = tempdir().unwrap();
        let candidates = resolve_default_config_candidates(&empty_env(), home.path());
        // Four dirs, four filenames each.
        assert_eq!(candidates.len(), 16);
        assert_eq!(candidates[0], home.path().join(".tessa/tessa.json"));
        assert_eq!(candidates[1], home.path().join(".tessa/moltbot.json"));
        assert_eq!(candidates[2], home.path().join(".tessa/clawdbot.json"));
        assert_eq!(candidates[3], home.path().join(".tessa/moldbot.json"));
        assert_eq!(candidates[4], home.path().join(".clawdbot/tessa.json"));
        assert_eq!(candidates[8], home.path().join(".moltbot/tessa.json"));
        assert_eq!(candidates[12], home.path().join(".moldbot/tessa.json"));
    }

    #[test]
    fn test_candidates_state_overrides_come_first() {
        let home = tempdir().unwrap();
        let env = env_of(&[
            ("TESSA_STATE_DIR", "/new-state"),
            ("CLAWDBOT_STATE_DIR", "/old-state"),
        ]);
        let candidates = resolve_default_config_candidates(&env, home.path());
        assert_eq!(candidates.len(), 24);
        assert_eq!(candidates[0], PathBuf::from("/new-state/tessa.json"));
        assert_eq!(candidates[3], PathBuf::from("/new-state/moldbot.json"));
        // MOLTBOT_STATE_DIR is unset, so clawdbot's override comes next.
        assert_eq!(candidates[4], PathBuf::from("/old-state/tessa.json"));
        assert_eq!(candidates[8], home.path().join(".tessa/tessa.json"));
    }

    #[test]
    fn test_config_path_candidate_picks_existing_legacy_file() {
        let home = tempdir().unwrap();
        let legacy_dir = home.path().join(".clawdbot");
        std::fs::create_dir(&legacy_dir).unwrap();
        std::fs::write(legacy_dir.join("clawdbot.json"), "{}").unwrap();
        assert_eq!(
            resolve_config_path_candidate(&empty_env(), home.path()),
            legacy_dir.join("clawdbot.json")
        );
    }

    #[test]
    fn test_config_path_candidate_falls_back_to_canonical() {
        let home = tempdir().unwrap();
        assert_eq!(
            resolve_config_path_candidate(&empty_env(), home.path()),
            home.path().join(".tessa/tessa.json")
        );
    }

    #[test]
    fn test_config_path_probes_given_state_dir() {
        let home = tempdir().unwrap();
        let state = tempdir().unwrap();
        std::fs::write(state.path().join("moltbot.json"), "{}").unwrap();
        assert_eq!(
            resolve_config_path(&empty_env(), state.path(), home.path()),
            state.path().join("moltbot.json")
        );
    }

    #[test]
    fn test_config_path_forces_canonical_under_state_override() {
        let home = tempdir().unwrap();
        let state = tempdir().unwrap();
        let env = env_of(&[("TESSA_STATE_DIR", state.path().to_str().unwrap())]);
        assert_eq!(
            resolve_config_path(&env, state.path(), home.path()),
            state.path().join("tessa.json")
        );
    }

    #[test]
    fn test_config_path_non_default_dir_gets_canonical() {
        let home = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        assert_eq!(
            resolve_config_path(&empty_env(), elsewhere.path(), home.path()),
            elsewhere.path().join("tessa.json")
        );
    }

    #[test]
    fn test_config_path_default_dir_widens_to_candidates() {
        let home = tempdir().unwrap();
        // An old install left a config under ~/.moldbot, which the narrow
        // per-dir probe cannot see.
        let historical = home.path().join(".moldbot");
        std::fs::create_dir(&historical).unwrap();
        std::fs::write(historical.join("moldbot.json"), "{}").unwrap();
        let default_dir = resolve_state_dir(&empty_env(), home.path());
        assert_eq!(
            resolve_config_path(&empty_env(), &default_dir, home.path()),
            historical.join("moldbot.json")
        );
    }

    #[test]
    fn test_oauth_dir_default_and_overrides() {
        let home = tempdir().unwrap();
        let state = home.path().join(".tessa");
        assert_eq!(
            resolve_oauth_dir(&empty_env(), home.path(), &state),
            state.join("credentials")
        );
        let env = env_of(&[("TESSA_OAUTH_DIR", "/secrets")]);
        assert_eq!(
            resolve_oauth_dir(&env, home.path(), &state),
            PathBuf::from("/secrets")
        );
        let env = env_of(&[("CLAWDBOT_OAUTH_DIR", "/old-secrets")]);
        assert_eq!(
            resolve_oauth_dir(&env, home.path(), &state),
            PathBuf::from("/old-secrets")
        );
    }

    #[test]
    fn test_oauth_dir_ignores_moltbot_namespace() {
        let home = tempdir().unwrap();
        let state = home.path().join(".tessa");
        let env = env_of(&[("MOLTBOT_OAUTH_DIR", "/never")]);
        assert_eq!(
            resolve_oauth_dir(&env, home.path(), &state),
            state.join("credentials")
        );
    }

    #[test]
    fn test_oauth_path_joins_fixed_filename() {
        let home = tempdir().unwrap();
        let state = home.path().join(".tessa");
        assert_eq!(
            resolve_oauth_path(&empty_env(), home.path(), &state),
            state.join("credentials/oauth.json")
        );
    }

    #[test]
    fn test_gateway_lock_dir_carries_uid_on_unix() {
        let tmp = tempdir().unwrap();
        let lock = resolve_gateway_lock_dir(tmp.path());
        let name = lock.file_name().unwrap().to_string_lossy().into_owned();
        if cfg!(unix) {
            assert!(name.starts_with("tessa-"));
            assert!(name["tessa-".len()..].parse::<u32>().is_ok());
        } else {
            assert_eq!(name, "tessa");
        }
        assert_eq!(lock.parent().unwrap(), tmp.path());
    }

    #[test]
    fn test_gateway_port_env_override() {
        let env = env_of(&[("TESSA_GATEWAY_PORT", "8080")]);
        assert_eq!(resolve_gateway_port(None, &env), 8080);
        let env = env_of(&[("CLAWDBOT_GATEWAY_PORT", " 9090 ")]);
        assert_eq!(resolve_gateway_port(None, &env), 9090);
    }

    #[test]
    fn test_gateway_port_rejects_non_positive_env() {
        for bad in ["-5", "0", "nope", ""] {
            let env = env_of(&[("TESSA_GATEWAY_PORT", bad)]);
            assert_eq!(resolve_gateway_port(None, &env), DEFAULT_GATEWAY_PORT);
        }
    }

    #[test]
    fn test_gateway_port_env_falls_through_to_config() {
        let cfg = Config {
            gateway: GatewayConfig { port: Some(9000) },
        };
        let env = env_of(&[("TESSA_GATEWAY_PORT", "-5")]);
        assert_eq!(resolve_gateway_port(Some(&cfg), &env), 9000);
    }

    #[test]
    fn test_gateway_port_config_then_default() {
        let cfg = Config {
            gateway: GatewayConfig { port: Some(9000) },
        };
        assert_eq!(resolve_gateway_port(Some(&cfg), &empty_env()), 9000);
        let cfg = Config::default();
        assert_eq!(
            resolve_gateway_port(Some(&cfg), &empty_env()),
            DEFAULT_GATEWAY_PORT
        );
        assert_eq!(resolve_gateway_port(None, &empty_env()), DEFAULT_GATEWAY_PORT);
    }

    #[test]
    fn test_nix_mode_requires_exact_literal() {
        assert!(resolve_is_nix_mode(&env_of(&[("TESSA_NIX_MODE", "1")])));
        assert!(resolve_is_nix_mode(&env_of(&[("CLAWDBOT_NIX_MODE", "1")])));
        assert!(!resolve_is_nix_mode(&env_of(&[("TESSA_NIX_MODE", " 1 ")])));
        assert!(!resolve_is_nix_mode(&env_of(&[("TESSA_NIX_MODE", "true")])));
        assert!(!resolve_is_nix_mode(&env_of(&[("MOLTBOT_NIX_MODE", "1")])));
        assert!(!resolve_is_nix_mode(&empty_env()));
    }

    #[test]
    fn test_resolvers_are_idempotent() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(".moltbot")).unwrap();
        let env = env_of(&[("TESSA_GATEWAY_PORT", "4000")]);
        assert_eq!(
            resolve_state_dir(&env, home.path()),
            resolve_state_dir(&env, home.path())
        );
        assert_eq!(
            resolve_config_path_candidate(&env, home.path()),
            resolve_config_path_candidate(&env, home.path())
        );
        assert_eq!(
            resolve_gateway_port(None, &env),
            resolve_gateway_port(None, &env)
        );
    }

    #[test]
    fn test_snapshot_is_internally_consistent() {
        let home = tempdir().unwrap();
        let tmp = tempdir().unwrap();
        let snapshot = ResolvedPaths::capture_with(&empty_env(), home.path(), tmp.path());
        assert_eq!(snapshot.state_dir, home.path().join(".tessa"));
        assert_eq!(snapshot.config_path, snapshot.state_dir.join("tessa.json"));
        assert_eq!(snapshot.oauth_dir, snapshot.state_dir.join("credentials"));
        assert_eq!(snapshot.oauth_path, snapshot.oauth_dir.join("oauth.json"));
        assert!(snapshot.gateway_lock_dir.starts_with(tmp.path()));
    }
}
