//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod render;

use std::path::Path;

use devsite_config::Config;
use devsite_masthead::{HeaderLink, MastheadConfig, Translations};
use devsite_nav::NavTree;

use crate::error::CliError;

pub(crate) use nav::NavArgs;
pub(crate) use render::RenderArgs;

/// Load and validate the navigation tree from a YAML file.
pub(crate) fn load_tree(tree_file: &Path) -> Result<NavTree, CliError> {
    let content = std::fs::read_to_string(tree_file)?;
    let tree = NavTree::from_yaml(&content)?;
    tracing::info!(
        path = %tree_file.display(),
        entries = tree.node_count(),
        "loaded navigation tree"
    );
    Ok(tree)
}

/// Build the translation table: built-in strings plus the configured
/// overrides, if any.
pub(crate) fn load_translations(config: &Config) -> Result<Translations, CliError> {
    let mut translations = Translations::builtin();
    if let Some(path) = &config.i18n_resolved.translations_file {
        let content = std::fs::read_to_string(path)?;
        translations.merge(Translations::from_yaml(&content)?);
        tracing::info!(path = %path.display(), "merged translation overrides");
    }
    Ok(translations)
}

/// Build the masthead settings from the loaded configuration.
pub(crate) fn masthead_config(config: &Config) -> MastheadConfig {
    MastheadConfig {
        logo: config.site.logo.clone(),
        logo_alt: config.site.logo_alt.clone(),
        logo_width: config.site.logo_width,
        logo_height: config.site.logo_height,
        links: config
            .links
            .iter()
            .map(|link| HeaderLink {
                label: link.label.clone(),
                href: link.href.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsite_render::Lang;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_tree_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tree_path = temp_dir.path().join("nav.yaml");
        std::fs::write(
            &tree_path,
            "- title: Data Storage\n  link: guide/topics/data/index.html\n",
        )
        .unwrap();

        let tree = load_tree(&tree_path).unwrap();

        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.nodes[0].title, "Data Storage");
    }

    #[test]
    fn test_load_tree_missing_file() {
        let result = load_tree(std::path::Path::new("/nonexistent/nav.yaml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_load_tree_invalid_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tree_path = temp_dir.path().join("nav.yaml");
        std::fs::write(&tree_path, "- title: [broken").unwrap();

        let result = load_tree(&tree_path);
        assert!(matches!(result, Err(CliError::Tree(_))));
    }

    #[test]
    fn test_load_translations_merges_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("devsite.toml");
        let strings_path = temp_dir.path().join("strings.yaml");
        std::fs::write(
            &config_path,
            "[i18n]\ntranslations_file = \"strings.yaml\"\n",
        )
        .unwrap();
        std::fs::write(&strings_path, "Guides:\n  ja: ガイド\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let translations = load_translations(&config).unwrap();

        assert_eq!(translations.lookup("Guides", &Lang::new("ja")), "ガイド");
        // Built-in table survives the merge
        assert_eq!(translations.lookup("Develop", &Lang::new("ko")), "개발");
    }

    #[test]
    fn test_masthead_config_carries_links() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("devsite.toml");
        std::fs::write(
            &config_path,
            "[[links]]\nlabel = \"ESR Labs\"\nhref = \"https://esrlabs.com/\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let masthead = masthead_config(&config);

        assert_eq!(masthead.logo, "assets/images/logo.png");
        assert_eq!(masthead.links.len(), 1);
        assert_eq!(masthead.links[0].label, "ESR Labs");
    }
}
