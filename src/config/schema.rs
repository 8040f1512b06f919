//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or empty) config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the bridge.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Action-resolver conventions.
    pub resolver: ResolverConfig,

    /// Kernel wiring (admin guard, timeouts).
    pub kernel: KernelConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Conventions used by action discovery.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Root of the view tree candidate paths are joined under.
    pub view_root: String,

    /// Prefix prepended to every probed controller name.
    pub controller_prefix: String,

    /// Probe controllers before views; disable for view-only themes.
    pub resolve_controllers: bool,

    /// Inject the content-type's default data (post, posts, term, …) into
    /// resolved actions.
    pub inject_default_data: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            view_root: "wp".to_string(),
            controller_prefix: String::new(),
            resolve_controllers: true,
            inject_default_data: true,
        }
    }
}

/// Kernel wiring configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Path prefix the bridge never answers; administration screens stay
    /// with the CMS.
    pub admin_prefix: String,

    /// Per-request timeout applied by the kernel's middleware stack.
    pub request_timeout_secs: u64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            admin_prefix: "/wp-admin".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Address the metrics endpoint binds to.
    pub metrics_address: String,

    /// Default tracing filter when RUST_LOG is not set.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
            log_filter: "wp_bridge=debug,tower_http=debug".to_string(),
        }
    }
}
