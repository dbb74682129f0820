//! Path-segment decoding.
//!
//! # Responsibilities
//! - Turn one `PathDescriptor` into the literal fragment it represents
//! - Reverse-parse compiled matchers when no template was retained
//!
//! # Design Decisions
//! - Total: anything that cannot be reversed degrades to `<complex:RAW>`
//! - A retained template always wins over reverse parsing
//! - Regexes compiled once, on first use

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::routing::layer::{CompiledPattern, PathDescriptor};

/// Optional trailing slash emitted by non-strict matchers.
const TRAILING_SLASH: &str = r"\/?";

/// End-of-segment lookahead emitted by prefix (mount) matchers.
const SEGMENT_LOOKAHEAD: &str = r"(?=\/|$)";

/// `/^BODY$/flags`, where BODY is a run of escaped metacharacters or plain
/// characters. Any unescaped metacharacter (a capture group, a wildcard)
/// makes the envelope fail.
static ENVELOPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/\^((?:\\[.*+?^${}()|\[\]\\/]|[^.*+?^${}()|\[\]\\/])*)\$/[a-z]*$").unwrap()
});

static ESCAPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\(.)").unwrap());

/// Decode a descriptor into the literal path fragment it matches.
pub fn decode(descriptor: &PathDescriptor) -> Cow<'_, str> {
    match descriptor {
        PathDescriptor::Literal(path) => Cow::Borrowed(path.as_str()),
        PathDescriptor::Root => Cow::Borrowed(""),
        PathDescriptor::Pattern(CompiledPattern {
            template: Some(template),
            ..
        }) => Cow::Borrowed(template.as_str()),
        PathDescriptor::Pattern(pattern) => Cow::Owned(decode_source(&pattern.source)),
    }
}

/// Recover the literal template from a compiled matcher's textual form.
pub fn decode_source(source: &str) -> String {
    let stripped = source
        .replacen(TRAILING_SLASH, "", 1)
        .replacen(SEGMENT_LOOKAHEAD, "$", 1);

    match ENVELOPE.captures(&stripped).and_then(|caps| caps.get(1)) {
        Some(body) => ESCAPED.replace_all(body.as_str(), "$1").into_owned(),
        None => {
            tracing::trace!(source, "matcher is not a plain static path");
            complex(source)
        }
    }
}

/// Diagnostic fallback for matchers that cannot be reversed.
pub fn complex(source: &str) -> String {
    format!("<complex:{}>", source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        let d = PathDescriptor::literal("/bankAccounts/:bankAccountId");
        assert_eq!(decode(&d), "/bankAccounts/:bankAccountId");
    }

    #[test]
    fn test_root_marker_is_empty() {
        assert_eq!(decode(&PathDescriptor::Root), "");
    }

    #[test]
    fn test_static_pattern() {
        let d = PathDescriptor::pattern(r"/^\/users\/?(?=\/|$)/");
        assert_eq!(decode(&d), "/users");
    }

    #[test]
    fn test_case_insensitive_flag_ignored() {
        let d = PathDescriptor::pattern(r"/^\/bankTransfers\/?(?=\/|$)/i");
        assert_eq!(decode(&d), "/bankTransfers");
    }

    #[test]
    fn test_escaped_metacharacter() {
        let d = PathDescriptor::pattern(r"/^\/a\.b\/?(?=\/|$)/");
        assert_eq!(decode(&d), "/a.b");
    }

    #[test]
    fn test_nested_static_segments() {
        let d = PathDescriptor::pattern(r"/^\/api\/v1\/?(?=\/|$)/i");
        assert_eq!(decode(&d), "/api/v1");
    }

    #[test]
    fn test_capture_group_falls_back() {
        let raw = r"/^\/users\/([^\/]+?)\/?(?=\/|$)/";
        let d = PathDescriptor::pattern(raw);
        assert_eq!(decode(&d), format!("<complex:{}>", raw));
    }

    #[test]
    fn test_wildcard_falls_back() {
        let raw = r"/^\/files\/(.*)\/?(?=\/|$)/i";
        assert_eq!(decode_source(raw), format!("<complex:{}>", raw));
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(decode_source("not a regex"), "<complex:not a regex>");
        assert_eq!(decode_source(""), "<complex:>");
    }

    #[test]
    fn test_root_matcher_without_marker() {
        // A "/" matcher observed in compiled form only.
        assert_eq!(decode_source(r"/^\/?(?=\/|$)/i"), "");
    }

    #[test]
    fn test_retained_template_wins() {
        let d = PathDescriptor::Pattern(
            CompiledPattern::new(r"/^\/users\/([^\/]+?)\/?(?=\/|$)/i").with_template("/users/:id"),
        );
        assert_eq!(decode(&d), "/users/:id");
    }
}
