//! Configuration loading from disk.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};

/// Load and validate configuration from a TOML file.
pub fn from_file(path: &Path) -> BridgeResult<BridgeConfig> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn from_toml_str(content: &str) -> BridgeResult<BridgeConfig> {
    let config: BridgeConfig =
        toml::from_str(content).map_err(|e| BridgeError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Semantic checks beyond what deserialization enforces.
pub fn validate(config: &BridgeConfig) -> BridgeResult<()> {
    if config.resolver.view_root.is_empty() {
        return Err(BridgeError::Config(
            "resolver.view_root must not be empty".to_string(),
        ));
    }
    if config.kernel.request_timeout_secs == 0 {
        return Err(BridgeError::Config(
            "kernel.request_timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        return Err(BridgeError::Config(format!(
            "observability.metrics_address `{}` is not a socket address",
            config.observability.metrics_address
        )));
    }
    Ok(())
}
