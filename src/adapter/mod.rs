//! Tree construction subsystem.
//!
//! # Data Flow
//! ```text
//! Application registration (code or manifest)
//!     → manifest.rs (resolve named routers, reject cycles)
//!     → builder.rs (register middleware / routes / mounts in order)
//!     → Vec<Layer> (explicit, read-only tree)
//! ```
//!
//! # Design Decisions
//! - Layers are classified here, once; the walker never inspects shapes
//! - Mount prefixes are compiled like a dispatch layer would compile them
//! - Templates retained by default so decoding never needs to reverse-parse

pub mod builder;
pub mod manifest;

pub use builder::{AdapterOptions, RouterBuilder};
pub use manifest::{build_tree, ManifestError, RouterManifest, RouterTable, StackEntry};
