//! Masthead string translations.
//!
//! An explicit mapping from fixed masthead labels (e.g. "Develop") to
//! per-language display strings, loaded as static configuration. Lookup
//! falls back to the untranslated label - a missing translation is never
//! an error.
//!
//! Additional tables can be authored in YAML and merged over the built-in
//! one:
//!
//! ```yaml
//! Guides:
//!   ja: ガイド
//! Reference:
//!   ja: リファレンス
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use devsite_render::Lang;

/// Mapping from masthead label to per-language display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, BTreeMap<Lang, String>>,
}

/// Error type for translation loading.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// YAML parsing error.
    #[error("Invalid YAML: {0}")]
    Parse(String),
}

impl Translations {
    /// The built-in table for the fixed masthead strings.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (lang, text) in [
            ("zh-TW", "開發"),
            ("zh-CN", "开发"),
            ("ru", "Разработка"),
            ("ko", "개발"),
            ("ja", "開発"),
            ("es", "Desarrollar"),
        ] {
            table.insert("Develop", Lang::new(lang), text);
        }
        table
    }

    /// Parse a table from YAML content.
    ///
    /// Empty content yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, I18nError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let table: Self =
            serde_yaml::from_str(trimmed).map_err(|e| I18nError::Parse(e.to_string()))?;
        tracing::debug!(labels = table.len(), "loaded translation table");
        Ok(table)
    }

    /// Insert one translation.
    pub fn insert(&mut self, label: impl Into<String>, lang: Lang, text: impl Into<String>) {
        self.entries
            .entry(label.into())
            .or_default()
            .insert(lang, text.into());
    }

    /// Merge `other` over this table; `other` wins per label and language.
    pub fn merge(&mut self, other: Self) {
        for (label, texts) in other.entries {
            self.entries.entry(label).or_default().extend(texts);
        }
    }

    /// Display string for `label` in `lang`, falling back to the
    /// untranslated label.
    #[must_use]
    pub fn lookup<'a>(&'a self, label: &'a str, lang: &Lang) -> &'a str {
        self.entries
            .get(label)
            .and_then(|texts| texts.get(lang))
            .map_or(label, String::as_str)
    }

    /// Number of labels with at least one translation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_develop_translations() {
        let table = Translations::builtin();
        assert_eq!(table.lookup("Develop", &Lang::new("zh-TW")), "開發");
        assert_eq!(table.lookup("Develop", &Lang::new("ko")), "개발");
        assert_eq!(table.lookup("Develop", &Lang::new("es")), "Desarrollar");
    }

    #[test]
    fn test_lookup_falls_back_to_label() {
        let table = Translations::builtin();
        // No english entry exists - the label itself is the english text
        assert_eq!(table.lookup("Develop", &Lang::default()), "Develop");
        // Untranslated labels pass through for any language
        assert_eq!(table.lookup("Guides", &Lang::new("ja")), "Guides");
    }

    #[test]
    fn test_from_yaml() {
        let table = Translations::from_yaml(
            "\
Guides:
  ja: ガイド
  ko: 가이드
Reference:
  ja: リファレンス
",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Guides", &Lang::new("ja")), "ガイド");
        assert_eq!(table.lookup("Reference", &Lang::new("ja")), "リファレンス");
    }

    #[test]
    fn test_from_yaml_empty() {
        let table = Translations::from_yaml("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = Translations::from_yaml("Guides: [broken");
        assert!(matches!(result, Err(I18nError::Parse(_))));
    }

    #[test]
    fn test_merge_other_wins() {
        let mut table = Translations::builtin();
        let mut overrides = Translations::default();
        overrides.insert("Develop", Lang::new("ja"), "開発する");
        overrides.insert("Guides", Lang::new("ja"), "ガイド");

        table.merge(overrides);

        assert_eq!(table.lookup("Develop", &Lang::new("ja")), "開発する");
        // Untouched languages survive the merge
        assert_eq!(table.lookup("Develop", &Lang::new("ko")), "개발");
        assert_eq!(table.lookup("Guides", &Lang::new("ja")), "ガイド");
    }

    #[test]
    fn test_table_is_shareable() {
        static_assertions::assert_impl_all!(Translations: Send, Sync);
    }
}
