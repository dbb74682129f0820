//! Path template compilation.
//!
//! Produces the matcher form a dispatch layer observes for a registered path,
//! so adapters can build trees that look like the real thing.
//!
//! | template      | end   | compiled                           |
//! |---------------|-------|------------------------------------|
//! | `/users`      | false | `/^\/users\/?(?=\/|$)/i`           |
//! | `/users/:id`  | false | `/^\/users\/([^\/]+?)\/?(?=\/|$)/i` |
//! | `/users`      | true  | `/^\/users\/?$/i`                  |
//! | `/`           | false | match-root marker                  |

use crate::routing::layer::{CompiledPattern, PathDescriptor};

const METACHARACTERS: &str = r".*+?^${}()|[]\/";

/// Matcher compilation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Anchor at end of path (routes) instead of at a segment boundary (mounts).
    pub end: bool,
    /// Do not tolerate a trailing slash.
    pub strict: bool,
    /// Case-sensitive matching (drops the `i` flag).
    pub sensitive: bool,
    /// Keep the template on the compiled pattern.
    pub retain_template: bool,
}

impl PatternOptions {
    /// Options for a mounted router's prefix.
    pub fn mount() -> Self {
        Self {
            end: false,
            ..Self::default()
        }
    }
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            end: true,
            strict: false,
            sensitive: false,
            retain_template: true,
        }
    }
}

/// Compile a path template into a descriptor.
pub fn compile(template: &str, options: PatternOptions) -> PathDescriptor {
    if template == "/" && !options.end {
        return PathDescriptor::Root;
    }

    let mut source = String::from("/^");
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek().is_some_and(|n| is_param_char(*n)) => {
                while chars.peek().is_some_and(|n| is_param_char(*n)) {
                    chars.next();
                }
                source.push_str(r"([^\/]+?)");
            }
            '*' => source.push_str("(.*)"),
            c if METACHARACTERS.contains(c) => {
                source.push('\\');
                source.push(c);
            }
            c => source.push(c),
        }
    }

    if !options.strict && !template.ends_with('/') {
        source.push_str(r"\/?");
    }
    source.push_str(if options.end { "$" } else { r"(?=\/|$)" });
    source.push('/');
    if !options.sensitive {
        source.push('i');
    }

    let pattern = CompiledPattern::new(source);
    PathDescriptor::Pattern(if options.retain_template {
        pattern.with_template(template)
    } else {
        pattern
    })
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::decoder::decode;

    fn source_of(d: &PathDescriptor) -> &str {
        match d {
            PathDescriptor::Pattern(p) => &p.source,
            other => panic!("expected pattern, got {:?}", other),
        }
    }

    fn bare() -> PatternOptions {
        PatternOptions {
            retain_template: false,
            ..PatternOptions::mount()
        }
    }

    #[test]
    fn test_static_mount() {
        let d = compile("/users", bare());
        assert_eq!(source_of(&d), r"/^\/users\/?(?=\/|$)/i");
    }

    #[test]
    fn test_param_mount() {
        let d = compile("/users/:id", bare());
        assert_eq!(source_of(&d), r"/^\/users\/([^\/]+?)\/?(?=\/|$)/i");
    }

    #[test]
    fn test_route_anchor() {
        let opts = PatternOptions {
            retain_template: false,
            sensitive: true,
            ..PatternOptions::default()
        };
        assert_eq!(source_of(&compile("/users", opts)), r"/^\/users\/?$/");
    }

    #[test]
    fn test_root_mount_is_marker() {
        assert_eq!(compile("/", PatternOptions::mount()), PathDescriptor::Root);
    }

    #[test]
    fn test_dot_is_escaped() {
        let d = compile("/a.b", bare());
        assert_eq!(source_of(&d), r"/^\/a\.b\/?(?=\/|$)/i");
        assert_eq!(decode(&d), "/a.b");
    }

    #[test]
    fn test_static_compiled_form_decodes_back() {
        for template in ["/users", "/bankAccounts", "/api/v1", "/testData"] {
            assert_eq!(decode(&compile(template, bare())), template);
        }
    }

    #[test]
    fn test_template_retained() {
        let d = compile("/users/:id", PatternOptions::mount());
        match &d {
            PathDescriptor::Pattern(p) => assert_eq!(p.template.as_deref(), Some("/users/:id")),
            other => panic!("expected pattern, got {:?}", other),
        }
        assert_eq!(decode(&d), "/users/:id");
    }

    #[test]
    fn test_lone_colon_is_literal() {
        let d = compile("/a:", bare());
        assert_eq!(source_of(&d), r"/^\/a:\/?(?=\/|$)/i");
    }
}
