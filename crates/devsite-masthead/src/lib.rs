//! Page masthead renderer for devsite.
//!
//! The masthead is the header every generated page shares: logo block,
//! primary nav bar, search affordance, quicknav overlay, and a secondary
//! nav bar shown only on develop-section pages. All "selected" decisions
//! are pure functions of the [`SectionFlags`] snapshot for the current
//! page; nothing persists across renders.
//!
//! # Example
//!
//! ```
//! use devsite_masthead::{MastheadConfig, SectionFlags, Translations, render_masthead};
//! use devsite_render::{ClientSearchBehavior, Lang, RootPath};
//!
//! let flags = SectionFlags::for_section("guide").unwrap();
//! let html = render_masthead(
//!     &MastheadConfig::default(),
//!     &RootPath::new("../"),
//!     flags,
//!     &Lang::default(),
//!     &Translations::builtin(),
//!     &ClientSearchBehavior,
//! );
//! assert!(html.contains("<div id=\"nav-x\">"));
//! ```

mod consts;
mod flags;
mod i18n;
mod masthead;

pub use consts::{DEVELOP_LINK, GUIDES_LINK, INDEX_LINK, REFERENCE_LINK};
pub use flags::{SectionFlags, UnknownSection};
pub use i18n::{I18nError, Translations};
pub use masthead::{HeaderLink, MastheadConfig, render_masthead};
