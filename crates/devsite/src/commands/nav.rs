//! `devsite nav` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use devsite_config::{CliSettings, Config};
use devsite_nav::render_nav_tree;
use devsite_render::{ClientNavBehavior, Lang, RootPath};

use crate::commands::load_tree;
use crate::error::CliError;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to configuration file (default: auto-discover devsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation tree file (overrides config).
    #[arg(long)]
    tree_file: Option<PathBuf>,

    /// Print the tree as JSON instead of rendered HTML.
    #[arg(long)]
    json: bool,

    /// Page depth below the site root, used to build the link prefix.
    #[arg(short, long, default_value_t = 0)]
    depth: usize,

    /// Language preference (overrides config).
    #[arg(short, long)]
    lang: Option<String>,

    /// Enable verbose output (show load logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or tree loading fails or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            tree_file: self.tree_file,
            translations_file: None,
            lang: self.lang,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let tree = load_tree(&config.nav_resolved.tree_file)?;

        let mut stdout = std::io::stdout().lock();
        if self.json {
            let json = serde_json::to_string_pretty(&tree)?;
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        } else {
            let lang = Lang::new(config.i18n_resolved.default_lang.clone());
            let html = render_nav_tree(
                &tree,
                &RootPath::for_depth(self.depth),
                &lang,
                &ClientNavBehavior,
            );
            stdout.write_all(html.as_bytes())?;
        }

        Ok(())
    }
}
