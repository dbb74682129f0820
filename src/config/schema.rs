//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::adapter::{AdapterOptions, RouterManifest, RouterTable};
use crate::routing::{RouteDescent, WalkOptions};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IntrospectConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// How the tree is built, walked and rendered.
    pub output: OutputConfig,

    /// Diagnostic HTTP endpoint.
    pub admin: AdminConfig,

    /// Top-level application stack.
    pub app: RouterManifest,

    /// Named routers referenced by `mount` entries.
    pub routers: RouterTable,
}

impl IntrospectConfig {
    pub fn adapter_options(&self) -> AdapterOptions {
        AdapterOptions {
            retain_templates: self.output.retain_templates,
        }
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            route_descent: self.output.route_descent.into(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Rendering format for the route list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Route descent as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDescentSetting {
    #[default]
    FirstChild,
    AllHandlers,
}

impl From<RouteDescentSetting> for RouteDescent {
    fn from(setting: RouteDescentSetting) -> Self {
        match setting {
            RouteDescentSetting::FirstChild => RouteDescent::FirstChild,
            RouteDescentSetting::AllHandlers => RouteDescent::AllHandlers,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// How far to descend into a route's handler chain.
    pub route_descent: RouteDescentSetting,

    /// Keep mount templates next to compiled matchers.
    pub retain_templates: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            route_descent: RouteDescentSetting::FirstChild,
            retain_templates: true,
        }
    }
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable the admin endpoint.
    pub enabled: bool,

    /// Admin endpoint bind address.
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind_address: "127.0.0.1:8081".to_string(),
        }
    }
}
