//! Navigation tree model and renderer for devsite.
//!
//! The navigation tree is a static hierarchy of titled links, loaded once
//! per page build from a YAML file and never mutated at render time.
//! [`render_nav_tree`] expands it into the nested-list fragment the
//! developer-guide frontend expects, resolving localized labels and
//! prefixing every link with the page's root path.
//!
//! # Example
//!
//! ```
//! use devsite_nav::{NavTree, render_nav_tree};
//! use devsite_render::{ClientNavBehavior, Lang, RootPath};
//!
//! let tree = NavTree::from_yaml(
//!     "- title: Data Storage\n  link: guide/topics/data/index.html\n",
//! )
//! .unwrap();
//!
//! let html = render_nav_tree(
//!     &tree,
//!     &RootPath::new("../../"),
//!     &Lang::default(),
//!     &ClientNavBehavior,
//! );
//! assert!(html.contains("../../guide/topics/data/index.html"));
//! ```

mod renderer;
mod tree;

pub use renderer::render_nav_tree;
pub use tree::{NavNode, NavTree, TreeError};
