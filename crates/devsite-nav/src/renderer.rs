//! Nested-list HTML renderer for the navigation tree.
//!
//! Mirrors the DOM structure the developer-guide frontend scripts expect:
//! a `<ul id="nav">` where section entries wrap their header link in a
//! `nav-section-header` div followed by a nested list, and leaves are
//! plain list items. A trailing script block wires the injected
//! [`NavBehavior`]: section toggling plus the client-side language pass.

use std::fmt::Write;

use devsite_render::{DEFAULT_LANG, Lang, NavBehavior, RootPath, escape_html};

use crate::tree::{NavNode, NavTree};

/// Render the navigation tree as an HTML fragment.
///
/// Every href is the root prefix plus the entry's stored link. Displayed
/// text is the entry's label for `lang` when one exists, else the default
/// title; the wrapping `<span>` carries the language class of the label
/// actually shown so the client-side language pass can re-target it.
#[must_use]
pub fn render_nav_tree(
    tree: &NavTree,
    root: &RootPath,
    lang: &Lang,
    behavior: &dyn NavBehavior,
) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<ul id=\"nav\">\n");
    render_nodes(&mut html, &tree.nodes, root, lang);
    html.push_str("</ul>\n");

    render_behavior_script(&mut html, behavior);
    html
}

/// Render a sequence of entries at one nesting level.
fn render_nodes(html: &mut String, nodes: &[NavNode], root: &RootPath, lang: &Lang) {
    for node in nodes {
        if node.is_section() {
            html.push_str("<li class=\"nav-section\">\n<div class=\"nav-section-header\">");
            render_link(html, node, root, lang);
            html.push_str("</div>\n<ul>\n");
            render_nodes(html, &node.children, root, lang);
            html.push_str("</ul>\n</li>\n");
        } else {
            html.push_str("<li>");
            render_link(html, node, root, lang);
            html.push_str("</li>\n");
        }
    }
}

/// Render one entry's link with its resolved label.
fn render_link(html: &mut String, node: &NavNode, root: &RootPath, lang: &Lang) {
    // Span class names the language of the label actually displayed
    let label_lang = if node.labels.contains_key(lang) {
        lang.as_str()
    } else {
        DEFAULT_LANG
    };

    let _ = write!(
        html,
        "<a href=\"{}\"><span class=\"{}\">{}</span></a>",
        escape_html(&root.href(&node.link)),
        escape_html(label_lang),
        escape_html(node.label_for(lang)),
    );
}

/// Render the trailing script block from the injected behavior.
fn render_behavior_script(html: &mut String, behavior: &dyn NavBehavior) {
    html.push_str("<script type=\"text/javascript\">\n");
    html.push_str(&behavior.toggle_script());
    html.push('\n');
    html.push_str(&behavior.language_script());
    html.push('\n');
    html.push_str("</script>\n");
}
