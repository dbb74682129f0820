//! Registration-style tree builder.
//!
//! Mirrors how an application registers its stack: middleware, routes bound
//! to verbs, and routers mounted under a prefix. The result is the explicit
//! `Layer` tree the walker consumes.

use crate::routing::layer::{Layer, PathDescriptor};
use crate::routing::pattern::{compile, PatternOptions};

/// Adapter switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Keep mount templates alongside their compiled matchers.
    pub retain_templates: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            retain_templates: true,
        }
    }
}

/// Builder for one router's layer stack.
#[derive(Debug, Clone, Default)]
pub struct RouterBuilder {
    stack: Vec<Layer>,
    options: AdapterOptions,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AdapterOptions) -> Self {
        Self {
            stack: Vec::new(),
            options,
        }
    }

    /// Register middleware with no routing semantics.
    pub fn middleware(mut self, name: impl Into<String>) -> Self {
        self.stack.push(Layer::other(name));
        self
    }

    /// Bind one or more verbs to a path.
    ///
    /// Each verb becomes one handler stage on the route, in the given order.
    pub fn route<I, M>(mut self, path: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let children = methods
            .into_iter()
            .map(|m| Layer::handler(m.as_ref().to_lowercase()))
            .collect();
        self.stack
            .push(Layer::route(PathDescriptor::literal(path), children));
        self
    }

    pub fn get(self, path: impl Into<String>) -> Self {
        self.route(path, ["get"])
    }

    pub fn post(self, path: impl Into<String>) -> Self {
        self.route(path, ["post"])
    }

    pub fn put(self, path: impl Into<String>) -> Self {
        self.route(path, ["put"])
    }

    pub fn patch(self, path: impl Into<String>) -> Self {
        self.route(path, ["patch"])
    }

    pub fn delete(self, path: impl Into<String>) -> Self {
        self.route(path, ["delete"])
    }

    /// Mount another router under `path`.
    ///
    /// The prefix is compiled the way a dispatch layer compiles mount points;
    /// `/` becomes the match-root marker.
    pub fn mount(mut self, path: &str, router: RouterBuilder) -> Self {
        let descriptor = compile(
            path,
            PatternOptions {
                retain_template: self.options.retain_templates,
                ..PatternOptions::mount()
            },
        );
        self.stack.push(Layer::router(descriptor, router.stack));
        self
    }

    pub fn options(&self) -> AdapterOptions {
        self.options
    }

    pub fn build(self) -> Vec<Layer> {
        self.stack
    }
}
