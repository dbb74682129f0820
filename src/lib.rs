//! Router introspection library.
//!
//! Recovers the flat list of `"METHOD path"` signatures a server will answer
//! from an explicit router tree.

pub mod adapter;
pub mod admin;
pub mod config;
pub mod observability;
pub mod output;
pub mod routing;

pub use adapter::{build_tree, AdapterOptions, RouterBuilder};
pub use config::IntrospectConfig;
pub use output::RouteInventory;
pub use routing::{collect_routes, decode, Layer, PathDescriptor};
