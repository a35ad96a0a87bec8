//! Configuration types
//!
//! Only the slice of the config file this crate reads: the gateway port.
//! The full schema lives with the gateway itself; unknown fields in the
//! file are ignored here.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Gateway-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Port to bind to; `None` defers to the environment override or the
    /// built-in default (see `resolve_gateway_port`)
    #[serde(default)]
    pub port: Option<u16>,
}
