//! Navigation tree data model and YAML loading.
//!
//! The tree is authored as a YAML list of entries:
//!
//! ```yaml
//! - title: App Components
//!   link: guide/components/index.html
//!   labels:
//!     ja: アプリ コンポーネント
//!   children:
//!     - title: Services
//!       link: guide/components/services.html
//! ```
//!
//! Entries with children render as collapsible sections; leaves render as
//! direct links. Malformed entries (empty `title` or `link`) are an
//! authoring defect rejected at load time - rendering itself never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use devsite_render::Lang;

/// One entry in the static navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Default display title (the `"en"` label).
    pub title: String,
    /// Link target path, relative to the site root.
    pub link: String,
    /// Localized titles keyed by language code.
    ///
    /// Only documents available in translation carry an entry; lookup
    /// falls back to [`NavNode::title`] for every other language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<Lang, String>,
    /// Child entries, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Create a leaf entry with no localized labels.
    pub fn leaf(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            labels: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Whether this entry renders as a collapsible section.
    #[must_use]
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }

    /// Display label for `lang`: the localized title when one exists,
    /// otherwise the default title.
    #[must_use]
    pub fn label_for(&self, lang: &Lang) -> &str {
        self.labels.get(lang).map_or(&self.title, String::as_str)
    }
}

/// Static navigation tree, loaded once per page build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree {
    /// Top-level entries.
    pub nodes: Vec<NavNode>,
}

/// Error type for tree loading.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// YAML parsing error.
    #[error("Invalid YAML: {0}")]
    Parse(String),
    /// An entry is missing required text.
    #[error("Navigation entry \"{path}\" has an empty {field}")]
    EmptyField {
        /// Title path from the root to the offending entry.
        path: String,
        /// Which field was empty (`title` or `link`).
        field: &'static str,
    },
}

impl NavTree {
    /// Parse and validate a tree from YAML content.
    ///
    /// Empty content yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any entry has an
    /// empty `title` or `link`.
    pub fn from_yaml(content: &str) -> Result<Self, TreeError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let tree: Self =
            serde_yaml::from_str(trimmed).map_err(|e| TreeError::Parse(e.to_string()))?;
        tree.validate()?;
        tracing::debug!(entries = tree.node_count(), "loaded navigation tree");
        Ok(tree)
    }

    /// Validate every entry in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyField`] for the first entry with an
    /// empty `title` or `link`.
    pub fn validate(&self) -> Result<(), TreeError> {
        for node in &self.nodes {
            validate_node(node, "")?;
        }
        Ok(())
    }

    /// Total number of entries, including nested children.
    #[must_use]
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[NavNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.nodes)
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Recursively validate a node, tracking the title path for error messages.
fn validate_node(node: &NavNode, parent_path: &str) -> Result<(), TreeError> {
    let path = if parent_path.is_empty() {
        node.title.clone()
    } else {
        format!("{parent_path}/{}", node.title)
    };

    if node.title.trim().is_empty() {
        return Err(TreeError::EmptyField {
            path,
            field: "title",
        });
    }
    if node.link.trim().is_empty() {
        return Err(TreeError::EmptyField { path, field: "link" });
    }

    for child in &node.children {
        validate_node(child, &path)?;
    }
    Ok(())
}
