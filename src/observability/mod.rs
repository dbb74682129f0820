//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! walker / adapter / admin produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr (stdout is reserved for the route list)
//! ```
//!
//! # Design Decisions
//! - Structured fields (route, layers, routes) rather than formatted text
//! - Route discovery is logged at debug, the final inventory at info

pub mod logging;
