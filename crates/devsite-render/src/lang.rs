//! Language preference codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The default language code used when no localized text exists.
pub const DEFAULT_LANG: &str = "en";

/// A language preference code (e.g. `"en"`, `"ko"`, `"zh-TW"`).
///
/// The preference is resolved by the host per render; label lookups fall
/// back to the default language when no localized entry exists, never to
/// an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(String);

impl Lang {
    /// Create a language code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the default language.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LANG
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self(DEFAULT_LANG.to_owned())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Lang {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
