//! # Tessa
//!
//! Filesystem location and product-name resolution for the Tessa agent
//! gateway.
//!
//! The product has been renamed twice (`clawdbot` → `moltbot` → `tessa`),
//! so every lookup here walks a precedence chain: current-name environment
//! overrides first, then legacy-name overrides, then on-disk probes of the
//! current and legacy locations, then a computed default. A pre-existing
//! legacy install is never silently ignored; a fresh install always lands
//! on current-name defaults.
//!
//! All resolvers are pure functions of their inputs. The environment and
//! home/tmp directories are injectable so tests never mutate process state.

pub mod cli;
pub mod compat;
pub mod config;
pub mod env;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
