//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, mount cycles)
//!     → IntrospectConfig (validated, immutable)
//!     → adapter builds the router tree from [app] / [routers.*]
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AdminConfig, IntrospectConfig, ObservabilityConfig, OutputConfig, OutputFormat};
pub use validation::ValidationError;
