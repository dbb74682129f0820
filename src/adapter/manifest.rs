//! Declarative application manifest.
//!
//! Describes an application's registration order without running it:
//!
//! ```toml
//! [app]
//! stack = [
//!     { middleware = "cors" },
//!     { mount = "/", router = "auth" },
//!     { mount = "/users", router = "users" },
//! ]
//!
//! [routers.users]
//! stack = [
//!     { route = "/", methods = ["get"] },
//!     { route = "/:userId", methods = ["get", "patch"] },
//! ]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapter::builder::{AdapterOptions, RouterBuilder};
use crate::routing::layer::Layer;

/// Named routers available for mounting.
pub type RouterTable = BTreeMap<String, RouterManifest>;

/// One router's stack, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterManifest {
    pub stack: Vec<StackEntry>,
}

/// A single registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StackEntry {
    /// Mount the named router under a prefix.
    Mount { mount: String, router: String },
    /// Bind verbs to a path.
    Route { route: String, methods: Vec<String> },
    /// Middleware without routing semantics.
    Middleware { middleware: String },
}

/// Errors raised while resolving a manifest into a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("router '{0}' is not defined")]
    UnknownRouter(String),

    #[error("router '{0}' is mounted inside itself")]
    Cycle(String),
}

/// Resolve the application stack into a layer tree.
pub fn build_tree(
    app: &RouterManifest,
    routers: &RouterTable,
    options: AdapterOptions,
) -> Result<Vec<Layer>, ManifestError> {
    let mut visiting = Vec::new();
    let tree = build_router(app, routers, options, &mut visiting)?.build();
    tracing::debug!(layers = tree.len(), "Router tree assembled");
    Ok(tree)
}

fn build_router<'a>(
    manifest: &'a RouterManifest,
    routers: &'a RouterTable,
    options: AdapterOptions,
    visiting: &mut Vec<&'a str>,
) -> Result<RouterBuilder, ManifestError> {
    let mut builder = RouterBuilder::with_options(options);

    for entry in &manifest.stack {
        builder = match entry {
            StackEntry::Middleware { middleware } => builder.middleware(middleware.as_str()),
            StackEntry::Route { route, methods } => builder.route(route.as_str(), methods),
            StackEntry::Mount { mount, router } => {
                if visiting.contains(&router.as_str()) {
                    return Err(ManifestError::Cycle(router.clone()));
                }
                let child = routers
                    .get(router)
                    .ok_or_else(|| ManifestError::UnknownRouter(router.clone()))?;

                visiting.push(router.as_str());
                let nested = build_router(child, routers, options, visiting)?;
                visiting.pop();

                builder.mount(mount, nested)
            }
        };
    }

    Ok(builder)
}
