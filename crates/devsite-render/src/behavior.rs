//! Client-behavior collaborators.
//!
//! Interactive behavior (collapsible sections, language re-application,
//! search) runs client-side and is outside the renderers' responsibility.
//! The renderers only emit the call sites; these traits let the host inject
//! what those call sites invoke. The `Client*` implementations emit the
//! global functions the stock frontend scripts define.
//!
//! Behavior implementations return trusted script text that is written into
//! the markup unescaped; they must not embed untrusted input.

use crate::root_path::RootPath;

/// Navigation-tree behavior wired in after the tree markup.
pub trait NavBehavior {
    /// Script statement that makes `nav-section` headers collapsible.
    fn toggle_script(&self) -> String;

    /// Script statement that re-applies the client-resolved language
    /// preference across the rendered nav labels.
    ///
    /// This is the same language pass the masthead strings use, run once
    /// after initial load.
    fn language_script(&self) -> String;
}

/// Search-box behavior wired into the masthead's input element.
///
/// Handlers receive the [`RootPath`] where they need it so the search
/// backend can build absolute links from any page depth.
pub trait SearchBehavior {
    /// Handler for a key-down event in the search input.
    fn key_down_handler(&self, root: &RootPath) -> String;

    /// Handler for a key-up event in the search input.
    fn key_up_handler(&self, root: &RootPath) -> String;

    /// Handler for submitting the search form (navigates to full results).
    fn submit_handler(&self) -> String;

    /// Handler for the input gaining focus.
    fn focus_handler(&self) -> String;

    /// Handler for the input losing focus.
    fn blur_handler(&self) -> String;
}

/// Stock navigation behavior calling the frontend's global functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientNavBehavior;

impl NavBehavior for ClientNavBehavior {
    fn toggle_script(&self) -> String {
        "buildToggleLists();".to_owned()
    }

    fn language_script(&self) -> String {
        // getLangPref() is the host-provided preference lookup
        "changeNavLang(getLangPref());".to_owned()
    }
}

/// Stock search behavior calling the frontend's global functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientSearchBehavior;

impl SearchBehavior for ClientSearchBehavior {
    fn key_down_handler(&self, root: &RootPath) -> String {
        format!("return search_changed(event, true, '{root}')")
    }

    fn key_up_handler(&self, root: &RootPath) -> String {
        format!("return search_changed(event, false, '{root}')")
    }

    fn submit_handler(&self) -> String {
        "return submit_search()".to_owned()
    }

    fn focus_handler(&self) -> String {
        "search_focus_changed(this, true)".to_owned()
    }

    fn blur_handler(&self) -> String {
        "search_focus_changed(this, false)".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_nav_behavior_emits_global_calls() {
        let behavior = ClientNavBehavior;
        assert_eq!(behavior.toggle_script(), "buildToggleLists();");
        assert_eq!(behavior.language_script(), "changeNavLang(getLangPref());");
    }

    #[test]
    fn test_search_handlers_distinguish_key_direction() {
        let behavior = ClientSearchBehavior;
        let root = RootPath::new("../../");
        assert_eq!(
            behavior.key_down_handler(&root),
            "return search_changed(event, true, '../../')"
        );
        assert_eq!(
            behavior.key_up_handler(&root),
            "return search_changed(event, false, '../../')"
        );
    }

    #[test]
    fn test_search_handlers_pass_empty_root() {
        let behavior = ClientSearchBehavior;
        let root = RootPath::default();
        assert_eq!(
            behavior.key_down_handler(&root),
            "return search_changed(event, true, '')"
        );
    }

    #[test]
    fn test_focus_handlers() {
        let behavior = ClientSearchBehavior;
        assert_eq!(behavior.focus_handler(), "search_focus_changed(this, true)");
        assert_eq!(behavior.blur_handler(), "search_focus_changed(this, false)");
        assert_eq!(behavior.submit_handler(), "return submit_search()");
    }

    #[test]
    fn test_behaviors_are_shareable() {
        static_assertions::assert_impl_all!(ClientNavBehavior: Send, Sync);
        static_assertions::assert_impl_all!(ClientSearchBehavior: Send, Sync);
    }
}
