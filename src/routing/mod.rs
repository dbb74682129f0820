//! Router introspection subsystem.
//!
//! # Data Flow
//! ```text
//! Layer tree (built once by adapter)
//!     → walker.rs (depth-first, registration order)
//!     → decoder.rs (descriptor → literal fragment, at every boundary)
//!     → Return: ["GET /users", "POST /bankAccounts", ...]
//!
//! Tree construction (at startup):
//!     path templates
//!     → pattern.rs (compile to matcher form, optionally keep template)
//!     → layer.rs (explicit tagged tree)
//! ```
//!
//! # Design Decisions
//! - Tree is read-only during traversal
//! - Pure functions: no I/O, no locks, no shared path state
//! - Never fails: undecodable paths become `<complex:RAW>`

pub mod decoder;
pub mod layer;
pub mod pattern;
pub mod walker;

pub use decoder::decode;
pub use layer::{CompiledPattern, Layer, PathDescriptor};
pub use pattern::{compile, PatternOptions};
pub use walker::{collect_routes, collect_routes_with, walk, RouteDescent, WalkOptions};
