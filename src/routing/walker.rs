//! Route tree traversal.
//!
//! # Responsibilities
//! - Walk the layer tree depth-first in registration order
//! - Concatenate decoded fragments along each root-to-leaf path
//! - Emit one `"METHOD path"` string per handler reached
//!
//! # Design Decisions
//! - Prefix lives on the call stack, never in shared state
//! - No sorting, no deduplication across routes
//! - Total: undecodable fragments are carried as `<complex:...>`

use crate::routing::decoder::decode;
use crate::routing::layer::Layer;

/// How far to descend into a `Route` layer's handler chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouteDescent {
    /// Follow only the first child (the route's dispatch entry point).
    #[default]
    FirstChild,
    /// Follow every child, emitting each distinct method of the route once.
    AllHandlers,
}

/// Traversal switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    pub route_descent: RouteDescent,
}

/// Collect every route signature in the tree.
pub fn collect_routes(tree: &[Layer]) -> Vec<String> {
    collect_routes_with(tree, WalkOptions::default())
}

/// Collect every route signature in the tree using explicit options.
pub fn collect_routes_with(tree: &[Layer], options: WalkOptions) -> Vec<String> {
    let routes: Vec<String> = tree
        .iter()
        .flat_map(|layer| walk_with("", layer, options))
        .collect();

    tracing::debug!(
        layers = tree.len(),
        routes = routes.len(),
        "Route tree walked"
    );
    routes
}

/// Routes reachable from one layer, with `prefix` already accumulated.
pub fn walk(prefix: &str, layer: &Layer) -> Vec<String> {
    walk_with(prefix, layer, WalkOptions::default())
}

fn walk_with(prefix: &str, layer: &Layer, options: WalkOptions) -> Vec<String> {
    match layer {
        Layer::MethodHandler { method } => {
            let route = format!("{} {}", method.to_uppercase(), prefix);
            tracing::debug!(route = %route, "Route discovered");
            vec![route]
        }
        Layer::Route { path, children } => {
            let prefix = format!("{}{}", prefix, decode(path));
            match options.route_descent {
                RouteDescent::FirstChild => children
                    .first()
                    .map(|child| walk_with(&prefix, child, options))
                    .unwrap_or_default(),
                RouteDescent::AllHandlers => {
                    let mut routes: Vec<String> = Vec::new();
                    for child in children {
                        for route in walk_with(&prefix, child, options) {
                            if !routes.contains(&route) {
                                routes.push(route);
                            }
                        }
                    }
                    routes
                }
            }
        }
        Layer::SubRouter { path, children, .. } => {
            let prefix = format!("{}{}", prefix, decode(path));
            children
                .iter()
                .flat_map(|child| walk_with(&prefix, child, options))
                .collect()
        }
        Layer::Other { name } => {
            tracing::trace!(layer = %name, "Skipping non-routing layer");
            Vec::new()
        }
    }
}
