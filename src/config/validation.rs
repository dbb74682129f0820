//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (mounts reference defined routers)
//! - Reject mount cycles so the walked tree is finite
//! - Validate verbs, paths and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: IntrospectConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::BTreeSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::adapter::{RouterManifest, RouterTable, StackEntry};
use crate::config::schema::IntrospectConfig;

/// Verbs a route may be bound to.
pub const KNOWN_METHODS: &[&str] = &[
    "get", "post", "put", "patch", "delete", "head", "options", "trace", "connect", "all",
];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{owner}: mount '{path}' references undefined router '{router}'")]
    UnknownRouter {
        owner: String,
        path: String,
        router: String,
    },

    #[error("router '{0}' is reachable from itself")]
    MountCycle(String),

    #[error("{owner}: route '{path}' has no methods")]
    NoMethods { owner: String, path: String },

    #[error("{owner}: route '{path}' uses unknown method '{method}'")]
    UnknownMethod {
        owner: String,
        path: String,
        method: String,
    },

    #[error("{owner}: path '{path}' must start with '/'")]
    RelativePath { owner: String, path: String },

    #[error("admin bind address '{0}' is not a socket address")]
    BindAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &IntrospectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_stack("app", &config.app, &config.routers, &mut errors);
    for (name, router) in &config.routers {
        check_stack(name, router, &config.routers, &mut errors);
    }
    check_cycles(&config.routers, &mut errors);

    if config.admin.enabled && config.admin.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.admin.bind_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_stack(
    owner: &str,
    manifest: &RouterManifest,
    routers: &RouterTable,
    errors: &mut Vec<ValidationError>,
) {
    for entry in &manifest.stack {
        match entry {
            StackEntry::Middleware { .. } => {}
            StackEntry::Route { route, methods } => {
                check_path(owner, route, errors);
                if methods.is_empty() {
                    errors.push(ValidationError::NoMethods {
                        owner: owner.to_string(),
                        path: route.clone(),
                    });
                }
                for method in methods {
                    if !KNOWN_METHODS.contains(&method.to_lowercase().as_str()) {
                        errors.push(ValidationError::UnknownMethod {
                            owner: owner.to_string(),
                            path: route.clone(),
                            method: method.clone(),
                        });
                    }
                }
            }
            StackEntry::Mount { mount, router } => {
                check_path(owner, mount, errors);
                if !routers.contains_key(router) {
                    errors.push(ValidationError::UnknownRouter {
                        owner: owner.to_string(),
                        path: mount.clone(),
                        router: router.clone(),
                    });
                }
            }
        }
    }
}

fn check_path(owner: &str, path: &str, errors: &mut Vec<ValidationError>) {
    if !path.starts_with('/') {
        errors.push(ValidationError::RelativePath {
            owner: owner.to_string(),
            path: path.to_string(),
        });
    }
}

/// Report every router that can reach itself through mounts.
fn check_cycles(routers: &RouterTable, errors: &mut Vec<ValidationError>) {
    for name in routers.keys() {
        let mut seen = BTreeSet::new();
        let mut pending: Vec<&str> = mounted_by(routers, name);

        while let Some(next) = pending.pop() {
            if next == name {
                errors.push(ValidationError::MountCycle(name.clone()));
                break;
            }
            if seen.insert(next) {
                pending.extend(mounted_by(routers, next));
            }
        }
    }
}

fn mounted_by<'a>(routers: &'a RouterTable, name: &str) -> Vec<&'a str> {
    routers
        .get(name)
        .map(|r| {
            r.stack
                .iter()
                .filter_map(|entry| match entry {
                    StackEntry::Mount { router, .. } => Some(router.as_str()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
