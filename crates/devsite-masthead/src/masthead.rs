//! Page masthead renderer.
//!
//! Produces the shared page header: logo block, primary nav bar, "more"
//! menu, search affordance, quicknav overlay, and the conditional
//! secondary nav bar. The fragment is a pure function of its inputs;
//! interactive behavior comes from the injected [`SearchBehavior`] call
//! sites and the client-side scripts that consume the emitted element ids.

use std::fmt::Write;

use serde::Deserialize;

use devsite_render::{Lang, RootPath, SearchBehavior, escape_html};

use crate::consts::{DEVELOP_LINK, GUIDES_LINK, INDEX_LINK, REFERENCE_LINK};
use crate::flags::SectionFlags;
use crate::i18n::Translations;

/// External link shown in the header "more" menu.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeaderLink {
    /// Display label.
    pub label: String,
    /// Absolute URL.
    pub href: String,
}

/// Static masthead settings supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MastheadConfig {
    /// Logo image path, relative to the site root.
    pub logo: String,
    /// Logo alt text.
    pub logo_alt: String,
    /// Logo display width in pixels.
    pub logo_width: u32,
    /// Logo display height in pixels.
    pub logo_height: u32,
    /// External links for the "more" menu.
    pub links: Vec<HeaderLink>,
}

impl Default for MastheadConfig {
    fn default() -> Self {
        Self {
            logo: "assets/images/logo.png".to_owned(),
            logo_alt: "Developers".to_owned(),
            logo_width: 123,
            logo_height: 25,
            links: Vec::new(),
        }
    }
}

/// Render the page masthead as an HTML fragment.
///
/// The secondary nav bar is present only when `flags` places the page in
/// a develop-tab section; its Guides/Reference highlighting follows
/// [`SectionFlags::guides_selected`] and [`SectionFlags::reference_selected`].
#[must_use]
pub fn render_masthead(
    config: &MastheadConfig,
    root: &RootPath,
    flags: SectionFlags,
    lang: &Lang,
    translations: &Translations,
    search: &dyn SearchBehavior,
) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div id=\"header\">\n<div class=\"wrap\" id=\"header-wrap\">\n");

    render_logo(&mut html, config, root);
    render_primary_nav(&mut html, root, flags, lang, translations);
    render_menu_container(&mut html, config, root, search);
    render_quicknav(&mut html, root, lang, translations);

    html.push_str("</div>\n</div>\n");

    render_search_results(&mut html);

    if flags.in_develop() {
        render_secondary_nav(&mut html, root, flags, lang, translations);
    }

    html
}

/// Render the logo block with the quicknav toggle button.
fn render_logo(html: &mut String, config: &MastheadConfig, root: &RootPath) {
    html.push_str("<div class=\"col-3 logo\">\n");
    let _ = write!(
        html,
        "<a href=\"{}\"><img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"{}\"></a>\n",
        escape_html(&root.href(INDEX_LINK)),
        escape_html(&root.href(&config.logo)),
        config.logo_width,
        config.logo_height,
        escape_html(&config.logo_alt),
    );
    html.push_str(
        "<div class=\"btn-quicknav\" id=\"btn-quicknav\">\n\
         <a href=\"#\" class=\"arrow-inactive\">Quicknav</a>\n\
         <a href=\"#\" class=\"arrow-active\">Quicknav</a>\n\
         </div>\n</div>\n",
    );
}

/// Render the primary nav bar with the Develop entry.
fn render_primary_nav(
    html: &mut String,
    root: &RootPath,
    flags: SectionFlags,
    lang: &Lang,
    translations: &Translations,
) {
    html.push_str("<ul class=\"nav-x col-9\">\n");
    let _ = write!(
        html,
        "<li class=\"develop last\"><a href=\"{}\"{}>{}</a></li>\n",
        escape_html(&root.href(DEVELOP_LINK)),
        selected_attr(flags.in_develop()),
        escape_html(translations.lookup("Develop", lang)),
    );
    html.push_str("</ul>\n");
}

/// Render the menu container: "more" menu plus the search affordance.
fn render_menu_container(
    html: &mut String,
    config: &MastheadConfig,
    root: &RootPath,
    search: &dyn SearchBehavior,
) {
    html.push_str("<div class=\"menu-container\">\n");

    render_more_menu(html, config);
    render_search(html, root, search);

    html.push_str("</div>\n");
}

/// Render the "more" menu overlay with the configured external links.
fn render_more_menu(html: &mut String, config: &MastheadConfig) {
    html.push_str(
        "<div class=\"moremenu\">\n<div id=\"more-btn\"></div>\n</div>\n\
         <div class=\"morehover\" id=\"moremenu\">\n\
         <div class=\"top\"></div>\n<div class=\"mid\">\n\
         <div class=\"header\">Links</div>\n<ul>\n",
    );
    for link in &config.links {
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&link.href),
            escape_html(&link.label),
        );
    }
    html.push_str("</ul>\n</div>\n<div class=\"bottom\"></div>\n</div>\n");
}

/// Render the search box and the filtered-results container.
///
/// Handler strings come from the behavior collaborator and are written
/// unescaped; the key-down and key-up call sites differ so the client can
/// tell the event phases apart.
fn render_search(html: &mut String, root: &RootPath, search: &dyn SearchBehavior) {
    html.push_str(
        "<div class=\"search\" id=\"search-container\">\n\
         <div class=\"search-inner\">\n<div id=\"search-btn\"></div>\n",
    );
    let _ = write!(html, "<form onsubmit=\"{}\">\n", search.submit_handler());
    let _ = write!(
        html,
        "<input id=\"search_autocomplete\" type=\"text\" value=\"\" autocomplete=\"off\" \
         name=\"q\" onfocus=\"{}\" onblur=\"{}\" onkeydown=\"{}\" onkeyup=\"{}\">\n",
        search.focus_handler(),
        search.blur_handler(),
        search.key_down_handler(root),
        search.key_up_handler(root),
    );
    html.push_str("</form>\n<a class=\"close hide\">close</a>\n</div>\n</div>\n");

    html.push_str(
        "<div id=\"search_filtered_wrapper\">\n\
         <div id=\"search_filtered_div\" class=\"no-display\">\n\
         <ul id=\"search_filtered\">\n</ul>\n</div>\n</div>\n",
    );
}

/// Render the expanded quicknav overlay with its static shortcut list.
///
/// Always generated; shown and hidden by client interaction outside this
/// component's responsibility.
fn render_quicknav(html: &mut String, root: &RootPath, lang: &Lang, translations: &Translations) {
    html.push_str(
        "<div id=\"quicknav\" class=\"col-9\">\n<ul>\n<li class=\"develop last\">\n<ul>\n",
    );
    let _ = write!(
        html,
        "<li><a href=\"{}\">{}</a></li>\n",
        escape_html(&root.href(GUIDES_LINK)),
        escape_html(translations.lookup("Guides", lang)),
    );
    let _ = write!(
        html,
        "<li><a href=\"{}\">{}</a></li>\n",
        escape_html(&root.href(REFERENCE_LINK)),
        escape_html(translations.lookup("Reference", lang)),
    );
    html.push_str("</ul>\n</li>\n</ul>\n</div>\n");
}

/// Render the hidden full search results section.
fn render_search_results(html: &mut String) {
    html.push_str(
        "<div id=\"searchResults\" class=\"wrap\" style=\"display:none;\">\n\
         <h2 id=\"searchTitle\">Results</h2>\n\
         <div id=\"leftSearchControl\" class=\"search-control\">Loading...</div>\n\
         </div>\n",
    );
}

/// Render the secondary nav bar with Guides and Reference entries.
fn render_secondary_nav(
    html: &mut String,
    root: &RootPath,
    flags: SectionFlags,
    lang: &Lang,
    translations: &Translations,
) {
    html.push_str(
        "<div id=\"nav-x\">\n<div class=\"wrap\">\n\
         <ul class=\"nav-x col-9 develop\" style=\"width:100%\">\n",
    );
    let _ = write!(
        html,
        "<li><a href=\"{}\"{}>{}</a></li>\n",
        escape_html(&root.href(GUIDES_LINK)),
        selected_attr(flags.guides_selected()),
        escape_html(translations.lookup("Guides", lang)),
    );
    let _ = write!(
        html,
        "<li><a href=\"{}\"{}>{}</a></li>\n",
        escape_html(&root.href(REFERENCE_LINK)),
        selected_attr(flags.reference_selected()),
        escape_html(translations.lookup("Reference", lang)),
    );
    html.push_str("</ul>\n</div>\n</div>\n");
}

/// Attribute marking a nav entry as selected.
fn selected_attr(selected: bool) -> &'static str {
    if selected { " class=\"selected\"" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsite_render::ClientSearchBehavior;
    use pretty_assertions::assert_eq;

    fn render(root: &str, flags: SectionFlags, lang: &str) -> String {
        render_masthead(
            &MastheadConfig::default(),
            &RootPath::new(root),
            flags,
            &Lang::new(lang),
            &Translations::builtin(),
            &ClientSearchBehavior,
        )
    }

    #[test]
    fn test_logo_links_to_site_root() {
        let html = render("../../", SectionFlags::default(), "en");
        assert!(html.contains("<a href=\"../../index.html\">"));
        assert!(html.contains("src=\"../../assets/images/logo.png\""));
        assert!(html.contains("width=\"123\" height=\"25\" alt=\"Developers\""));
    }

    #[test]
    fn test_develop_entry_selected_for_any_section() {
        for name in ["training", "guide", "reference", "tools", "develop", "google"] {
            let html = render("", SectionFlags::for_section(name).unwrap(), "en");
            assert!(
                html.contains("<a href=\"develop/index.html\" class=\"selected\">Develop</a>"),
                "{name} should select the Develop entry"
            );
        }
    }

    #[test]
    fn test_develop_entry_unselected_outside_develop() {
        let html = render("", SectionFlags::default(), "en");
        assert!(html.contains("<a href=\"develop/index.html\">Develop</a>"));
    }

    #[test]
    fn test_develop_label_translated() {
        let html = render("", SectionFlags::default(), "ko");
        assert!(html.contains(">개발</a>"));
        assert!(!html.contains(">Develop</a>"));
    }

    #[test]
    fn test_develop_label_falls_back_untranslated() {
        // No french entry in the builtin table
        let html = render("", SectionFlags::default(), "fr");
        assert!(html.contains(">Develop</a>"));
    }

    #[test]
    fn test_search_call_sites_carry_root_path() {
        let html = render("../../", SectionFlags::default(), "en");
        assert!(html.contains("onkeydown=\"return search_changed(event, true, '../../')\""));
        assert!(html.contains("onkeyup=\"return search_changed(event, false, '../../')\""));
        assert!(html.contains("onsubmit=\"return submit_search()\""));
        assert!(html.contains("onfocus=\"search_focus_changed(this, true)\""));
        assert!(html.contains("onblur=\"search_focus_changed(this, false)\""));
        assert!(html.contains("id=\"search_autocomplete\""));
        assert!(html.contains("<ul id=\"search_filtered\">"));
    }

    #[test]
    fn test_quicknav_always_generated() {
        let html = render("", SectionFlags::default(), "en");
        assert!(html.contains("<div id=\"quicknav\" class=\"col-9\">"));
        assert!(html.contains("<a href=\"guide/components/index.html\">Guides</a>"));
        assert!(html.contains("<a href=\"reference/packages.html\">Reference</a>"));
    }

    #[test]
    fn test_secondary_nav_absent_without_flags() {
        let html = render("", SectionFlags::default(), "en");
        assert!(!html.contains("id=\"nav-x\""));
    }

    #[test]
    fn test_guide_page_selects_guides_only() {
        let html = render("", SectionFlags::for_section("guide").unwrap(), "en");
        assert!(html.contains("<div id=\"nav-x\">"));
        assert!(html.contains("<a href=\"guide/components/index.html\" class=\"selected\">Guides</a>"));
        assert!(html.contains("<a href=\"reference/packages.html\">Reference</a>"));
    }

    #[test]
    fn test_reference_page_selects_reference() {
        let html = render("", SectionFlags::for_section("reference").unwrap(), "en");
        assert!(html.contains("<a href=\"reference/packages.html\" class=\"selected\">Reference</a>"));
        assert!(html.contains("<a href=\"guide/components/index.html\">Guides</a>"));
    }

    #[test]
    fn test_gcm_carve_out_keeps_secondary_nav_unselected() {
        let flags = SectionFlags::from_names(["reference", "reference.gcm"]).unwrap();
        let html = render("", flags, "en");
        // Bar is present, but Reference is not highlighted
        assert!(html.contains("<div id=\"nav-x\">"));
        assert!(html.contains("<a href=\"reference/packages.html\">Reference</a>"));
        assert!(!html.contains("reference/packages.html\" class=\"selected\""));
    }

    #[test]
    fn test_more_menu_lists_configured_links() {
        let config = MastheadConfig {
            links: vec![HeaderLink {
                label: "ESR Labs".to_owned(),
                href: "https://esrlabs.com/".to_owned(),
            }],
            ..Default::default()
        };
        let html = render_masthead(
            &config,
            &RootPath::default(),
            SectionFlags::default(),
            &Lang::default(),
            &Translations::builtin(),
            &ClientSearchBehavior,
        );
        assert!(html.contains("<div class=\"morehover\" id=\"moremenu\">"));
        assert!(html.contains("<li><a href=\"https://esrlabs.com/\">ESR Labs</a></li>"));
    }

    #[test]
    fn test_secondary_labels_use_translation_table() {
        let mut translations = Translations::builtin();
        translations.insert("Guides", Lang::new("ja"), "ガイド");
        let html = render_masthead(
            &MastheadConfig::default(),
            &RootPath::default(),
            SectionFlags::for_section("guide").unwrap(),
            &Lang::new("ja"),
            &translations,
            &ClientSearchBehavior,
        );
        assert!(html.contains(">ガイド</a>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let flags = SectionFlags::from_names(["reference", "reference.gms"]).unwrap();
        let first = render("../", flags, "zh-TW");
        let second = render("../", flags, "zh-TW");
        assert_eq!(first, second);
    }

    #[test]
    fn test_logo_alt_is_escaped() {
        let config = MastheadConfig {
            logo_alt: "Dev & Co".to_owned(),
            ..Default::default()
        };
        let html = render_masthead(
            &config,
            &RootPath::default(),
            SectionFlags::default(),
            &Lang::default(),
            &Translations::builtin(),
            &ClientSearchBehavior,
        );
        assert!(html.contains("alt=\"Dev &amp; Co\""));
    }
}
