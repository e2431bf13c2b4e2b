//! Configuration management for devsite.
//!
//! Parses `devsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.logo`
//! - `links[].href`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation tree file.
    pub tree_file: Option<PathBuf>,
    /// Override translations file.
    pub translations_file: Option<PathBuf>,
    /// Override default language.
    pub lang: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "devsite.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Navigation configuration (paths are relative strings from TOML).
    #[serde(default)]
    nav: NavConfigRaw,
    /// Localization configuration (paths are relative strings from TOML).
    #[serde(default)]
    i18n: I18nConfigRaw,
    /// External links for the header "more" menu.
    #[serde(default)]
    pub links: Vec<LinkConfig>,

    /// Resolved navigation configuration (set after loading).
    #[serde(skip)]
    pub nav_resolved: NavConfig,
    /// Resolved localization configuration (set after loading).
    #[serde(skip)]
    pub i18n_resolved: I18nConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Logo image path, relative to the site root.
    pub logo: String,
    /// Logo alt text.
    pub logo_alt: String,
    /// Logo display width in pixels.
    pub logo_width: u32,
    /// Logo display height in pixels.
    pub logo_height: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo: "assets/images/logo.png".to_owned(),
            logo_alt: "Developers".to_owned(),
            logo_width: 123,
            logo_height: 25,
        }
    }
}

/// External link shown in the header "more" menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkConfig {
    /// Display label.
    pub label: String,
    /// Absolute URL.
    pub href: String,
}

/// Raw navigation configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavConfigRaw {
    tree_file: Option<String>,
}

/// Resolved navigation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct NavConfig {
    /// YAML file holding the navigation tree.
    pub tree_file: PathBuf,
}

/// Raw localization configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct I18nConfigRaw {
    default_lang: Option<String>,
    translations_file: Option<String>,
}

/// Resolved localization configuration with absolute paths.
#[derive(Debug)]
pub struct I18nConfig {
    /// Language used when the host supplies no preference.
    pub default_lang: String,
    /// Optional YAML file merged over the built-in translation table.
    pub translations_file: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_lang: "en".to_owned(),
            translations_file: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.logo`").
        field: String,
        /// Error message (e.g., "${`ASSET_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `devsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(tree_file) = &settings.tree_file {
            self.nav_resolved.tree_file.clone_from(tree_file);
        }
        if let Some(translations_file) = &settings.translations_file {
            self.i18n_resolved.translations_file = Some(translations_file.clone());
        }
        if let Some(lang) = &settings.lang {
            self.i18n_resolved.default_lang.clone_from(lang);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            nav: NavConfigRaw::default(),
            i18n: I18nConfigRaw::default(),
            links: Vec::new(),
            nav_resolved: NavConfig {
                tree_file: base.join("nav.yaml"),
            },
            i18n_resolved: I18nConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.logo, "site.logo")?;
        require_non_empty(&self.site.logo_alt, "site.logo_alt")?;
        require_non_empty(&self.i18n_resolved.default_lang, "i18n.default_lang")?;

        for link in &self.links {
            require_non_empty(&link.label, "links.label")?;
            require_non_empty(&link.href, "links.href")?;
            require_http_url(&link.href, "links.href")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.logo = expand::expand_env(&self.site.logo, "site.logo")?;

        for link in &mut self.links {
            link.href = expand::expand_env(&link.href, "links.href")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.nav_resolved = NavConfig {
            tree_file: resolve(self.nav.tree_file.as_deref(), "nav.yaml"),
        };

        self.i18n_resolved = I18nConfig {
            default_lang: self
                .i18n
                .default_lang
                .clone()
                .unwrap_or_else(|| "en".to_owned()),
            translations_file: self
                .i18n
                .translations_file
                .as_deref()
                .map(|f| config_dir.join(f)),
        };
    }
}
