//! Router tree data model.
//!
//! The tree is an explicit value built once by an adapter (see
//! [`crate::adapter`]). Nothing here knows about a live dispatch layer.

use serde::{Deserialize, Serialize};

/// What URL fragment a `Route` or `SubRouter` layer matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PathDescriptor {
    /// Already a usable path fragment.
    Literal(String),
    /// Matches `/` exactly and contributes no fragment.
    Root,
    /// A compiled matcher, e.g. `/^\/users\/?(?=\/|$)/i`.
    Pattern(CompiledPattern),
}

impl PathDescriptor {
    pub fn literal(path: impl Into<String>) -> Self {
        Self::Literal(path.into())
    }

    /// A compiled matcher whose template is no longer observable.
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(CompiledPattern::new(source))
    }
}

/// Textual form of a compiled path matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPattern {
    /// Regex literal form, slashes and flags included.
    pub source: String,

    /// The template the matcher was compiled from, when the adapter kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CompiledPattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// One node of the routing dispatch tree.
///
/// Children are kept in registration order; the walker preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Terminal leaf bound to one HTTP verb.
    MethodHandler { method: String },

    /// A single path-to-handler-chain binding.
    Route {
        path: PathDescriptor,
        #[serde(default)]
        children: Vec<Layer>,
    },

    /// A nested router mounted at a path prefix.
    SubRouter {
        name: String,
        path: PathDescriptor,
        #[serde(default)]
        children: Vec<Layer>,
    },

    /// Middleware with no routing semantics.
    Other {
        #[serde(default)]
        name: String,
    },
}

impl Layer {
    pub fn handler(method: impl Into<String>) -> Self {
        Self::MethodHandler {
            method: method.into(),
        }
    }

    pub fn route(path: PathDescriptor, children: Vec<Layer>) -> Self {
        Self::Route { path, children }
    }

    pub fn router(path: PathDescriptor, children: Vec<Layer>) -> Self {
        Self::SubRouter {
            name: "router".to_string(),
            path,
            children,
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::Other { name: name.into() }
    }

    /// Number of `MethodHandler` leaves at or below this layer.
    ///
    /// Upper bound on how many routes a walk of this layer can produce.
    pub fn handler_count(&self) -> usize {
        match self {
            Layer::MethodHandler { .. } => 1,
            Layer::Route { children, .. } | Layer::SubRouter { children, .. } => {
                children.iter().map(Layer::handler_count).sum()
            }
            Layer::Other { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_count() {
        let tree = Layer::router(
            PathDescriptor::literal("/api"),
            vec![
                Layer::other("json"),
                Layer::route(
                    PathDescriptor::literal("/users"),
                    vec![Layer::handler("get"), Layer::handler("get")],
                ),
                Layer::router(
                    PathDescriptor::Root,
                    vec![Layer::route(
                        PathDescriptor::literal("/x"),
                        vec![Layer::handler("post")],
                    )],
                ),
            ],
        );
        assert_eq!(tree.handler_count(), 3);
        assert_eq!(Layer::other("cors").handler_count(), 0);
    }

    #[test]
    fn test_json_shape() {
        let layer = Layer::route(
            PathDescriptor::pattern(r"/^\/users\/?(?=\/|$)/i"),
            vec![Layer::handler("get")],
        );
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["kind"], "route");
        assert_eq!(json["path"]["type"], "pattern");
        assert_eq!(json["children"][0]["method"], "get");

        let back: Layer = serde_json::from_value(json).unwrap();
        assert_eq!(back, layer);
    }

    #[test]
    fn test_router_name() {
        match Layer::router(PathDescriptor::Root, Vec::new()) {
            Layer::SubRouter { name, .. } => assert_eq!(name, "router"),
            other => panic!("unexpected layer: {:?}", other),
        }
    }
}
