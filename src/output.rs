//! Route inventory rendering.

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::routing::{collect_routes_with, Layer, WalkOptions};

/// The collected `"METHOD path"` strings, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteInventory {
    pub routes: Vec<String>,
}

impl RouteInventory {
    /// Walk a tree and capture its routes.
    pub fn from_tree(tree: &[Layer], options: WalkOptions) -> Self {
        Self {
            routes: collect_routes_with(tree, options),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes whose path could not be recovered literally.
    pub fn complex_count(&self) -> usize {
        self.routes.iter().filter(|r| r.contains("<complex:")).count()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.routes.join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}
