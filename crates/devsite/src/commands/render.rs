//! `devsite render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use devsite_config::{CliSettings, Config};
use devsite_masthead::{SectionFlags, render_masthead};
use devsite_nav::render_nav_tree;
use devsite_render::{ClientNavBehavior, ClientSearchBehavior, Lang, RootPath};

use crate::commands::{load_translations, load_tree, masthead_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover devsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation tree file (overrides config).
    #[arg(long)]
    tree_file: Option<PathBuf>,

    /// Page depth below the site root, used to build the link prefix.
    #[arg(short, long, default_value_t = 0)]
    depth: usize,

    /// Explicit link prefix (overrides --depth).
    #[arg(long)]
    toroot: Option<String>,

    /// Section the page belongs to (repeatable; e.g. guide, reference.gcm).
    #[arg(short, long)]
    section: Vec<String>,

    /// Language preference (overrides config).
    #[arg(short, long)]
    lang: Option<String>,

    /// Write masthead.html and nav.html into this directory instead of stdout.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Enable verbose output (show load and render logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or tree loading fails, a section
    /// name is unknown, or the fragments cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            tree_file: self.tree_file,
            translations_file: None,
            lang: self.lang,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let root = self
            .toroot
            .map_or_else(|| RootPath::for_depth(self.depth), RootPath::new);
        let flags = SectionFlags::from_names(&self.section)
            .map_err(|e| CliError::Validation(e.to_string()))?;
        let lang = Lang::new(config.i18n_resolved.default_lang.clone());

        let tree = load_tree(&config.nav_resolved.tree_file)?;
        let translations = load_translations(&config)?;

        let masthead = render_masthead(
            &masthead_config(&config),
            &root,
            flags,
            &lang,
            &translations,
            &ClientSearchBehavior,
        );
        let nav = render_nav_tree(&tree, &root, &lang, &ClientNavBehavior);

        match &self.out_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                std::fs::write(dir.join("masthead.html"), &masthead)?;
                std::fs::write(dir.join("nav.html"), &nav)?;
                output.success(&format!(
                    "Wrote masthead.html and nav.html to {}",
                    dir.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(masthead.as_bytes())?;
                stdout.write_all(nav.as_bytes())?;
            }
        }

        Ok(())
    }
}
