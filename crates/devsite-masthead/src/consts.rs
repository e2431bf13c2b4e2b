//! Fixed masthead link targets.
//!
//! These paths must exist as real pages in the published site; a broken
//! target is a content defect, not a runtime error.

/// Site landing page.
pub const INDEX_LINK: &str = "index.html";

/// Landing page for the Develop tab.
pub const DEVELOP_LINK: &str = "develop/index.html";

/// Landing page for the developer guides section.
pub const GUIDES_LINK: &str = "guide/components/index.html";

/// Landing page for the API reference section.
pub const REFERENCE_LINK: &str = "reference/packages.html";
