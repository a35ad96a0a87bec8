//! Configuration module
//!
//! Split into focused pieces:
//! - types.rs: the config slice this crate reads
//! - io.rs: config file loading (JSON5)
//! - paths.rs: state/config/OAuth/lock-dir and port resolution

mod io;
mod paths;
mod types;

pub use types::{Config, GatewayConfig};

pub use io::{load_config, load_config_from_path};

pub use paths::{
    config_path, gateway_lock_dir, gateway_port, is_nix_mode, oauth_path,
    resolve_canonical_config_path, resolve_config_path, resolve_config_path_candidate,
    resolve_default_config_candidates, resolve_gateway_lock_dir, resolve_gateway_port,
    resolve_is_nix_mode, resolve_legacy_state_dir, resolve_legacy_state_dirs,
    resolve_new_state_dir, resolve_oauth_dir, resolve_oauth_path, resolve_state_dir,
    resolve_user_path, state_dir, ResolvedPaths, DEFAULT_GATEWAY_PORT,
};
