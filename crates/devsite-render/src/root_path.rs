//! Root-relative link prefix.

use std::fmt;

/// Relative path prefix to the site root ("toroot").
///
/// Computed by the host per page depth and prepended to every internal
/// link, so the same fragment renders correctly at any directory depth.
/// The empty prefix is valid and addresses pages at the root itself.
///
/// Renderers must build every internal href through [`RootPath::href`];
/// a link emitted without the prefix is a defect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RootPath(String);

impl RootPath {
    /// Create a root path from an explicit prefix (e.g. `"../../"`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Root path for a page `depth` directories below the site root.
    ///
    /// Depth 0 is the root itself (empty prefix); depth 2 yields `"../../"`.
    #[must_use]
    pub fn for_depth(depth: usize) -> Self {
        Self("../".repeat(depth))
    }

    /// The raw prefix string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an internal href: the prefix followed by `target`.
    #[must_use]
    pub fn href(&self, target: &str) -> String {
        format!("{}{target}", self.0)
    }
}

impl fmt::Display for RootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_prefix_leaves_target_unchanged() {
        let root = RootPath::default();
        assert_eq!(root.href("index.html"), "index.html");
    }

    #[test]
    fn test_prefix_prepended_to_target() {
        let root = RootPath::new("../../");
        assert_eq!(
            root.href("guide/components/index.html"),
            "../../guide/components/index.html"
        );
    }

    #[test]
    fn test_for_depth_zero_is_empty() {
        assert_eq!(RootPath::for_depth(0), RootPath::default());
        assert_eq!(RootPath::for_depth(0).as_str(), "");
    }

    #[test]
    fn test_for_depth_builds_parent_segments() {
        assert_eq!(RootPath::for_depth(1).as_str(), "../");
        assert_eq!(RootPath::for_depth(3).as_str(), "../../../");
    }

    #[test]
    fn test_display_matches_prefix() {
        assert_eq!(RootPath::new("../").to_string(), "../");
    }
}
