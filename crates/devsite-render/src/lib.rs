//! Shared rendering primitives for the devsite page chrome.
//!
//! The navigation tree and masthead renderers are pure functions producing
//! HTML text; this crate holds the inputs they have in common:
//!
//! - [`RootPath`] - the relative prefix prepended to every internal link
//! - [`Lang`] - the current language preference for label lookup
//! - [`escape_html`] - HTML escaping for text and attribute values
//! - [`NavBehavior`] / [`SearchBehavior`] - injected client-behavior
//!   collaborators that contribute script call sites to the rendered markup
//!   without this crate implementing any client-side logic itself

mod behavior;
mod escape;
mod lang;
mod root_path;

pub use behavior::{ClientNavBehavior, ClientSearchBehavior, NavBehavior, SearchBehavior};
pub use escape::escape_html;
pub use lang::{DEFAULT_LANG, Lang};
pub use root_path::RootPath;
