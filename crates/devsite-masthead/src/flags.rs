//! Section flags for nav-bar highlighting.

use serde::Deserialize;

/// Boolean context describing which top-level site section the current
/// page belongs to.
///
/// Every flag defaults to `false`, and flags absent from a deserialized
/// document are `false` - there is no distinction between "absent" and
/// "false". Selection decisions derived from the flags are pure functions
/// of this snapshot.
#[allow(clippy::struct_excessive_bools)] // The domain is a set of named booleans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionFlags {
    /// Page belongs to the training section.
    pub training: bool,
    /// Page belongs to the developer guides.
    pub guide: bool,
    /// Page belongs to the API reference.
    pub reference: bool,
    /// Page belongs to the tools section.
    pub tools: bool,
    /// Page belongs to the develop landing pages.
    pub develop: bool,
    /// Page belongs to the partner services section.
    pub google: bool,
    /// Carve-out: cloud-messaging reference pages suppress the Reference
    /// highlight.
    pub reference_gcm: bool,
    /// Carve-out: play-services reference pages suppress the Reference
    /// highlight.
    pub reference_gms: bool,
}

/// Error returned when a section name is not recognized.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section flag: {0}")]
pub struct UnknownSection(pub String);

impl SectionFlags {
    /// Flags with the single named section set.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSection`] if `name` is not a known flag.
    pub fn for_section(name: &str) -> Result<Self, UnknownSection> {
        let mut flags = Self::default();
        flags.set(name)?;
        Ok(flags)
    }

    /// Flags with every named section set.
    ///
    /// Accepts the flag names `training`, `guide`, `reference`, `tools`,
    /// `develop`, `google` and the sub-flags `reference.gcm`,
    /// `reference.gms`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSection`] for the first unrecognized name.
    pub fn from_names<I, S>(names: I) -> Result<Self, UnknownSection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for name in names {
            flags.set(name.as_ref())?;
        }
        Ok(flags)
    }

    /// Set the named flag.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSection`] if `name` is not a known flag.
    pub fn set(&mut self, name: &str) -> Result<(), UnknownSection> {
        match name {
            "training" => self.training = true,
            "guide" => self.guide = true,
            "reference" => self.reference = true,
            "tools" => self.tools = true,
            "develop" => self.develop = true,
            "google" => self.google = true,
            "reference.gcm" => self.reference_gcm = true,
            "reference.gms" => self.reference_gms = true,
            other => return Err(UnknownSection(other.to_owned())),
        }
        Ok(())
    }

    /// Whether the page belongs to any develop-tab section.
    ///
    /// Drives both the Develop entry's selected styling and the presence
    /// of the secondary nav bar.
    #[must_use]
    pub fn in_develop(&self) -> bool {
        self.training || self.guide || self.reference || self.tools || self.develop || self.google
    }

    /// Whether the secondary nav bar's Guides entry is selected.
    #[must_use]
    pub fn guides_selected(&self) -> bool {
        self.guide
    }

    /// Whether the secondary nav bar's Reference entry is selected.
    ///
    /// Carved-out reference subsections (`reference_gcm`, `reference_gms`)
    /// must not highlight the generic Reference tab.
    #[must_use]
    pub fn reference_selected(&self) -> bool {
        self.reference && !(self.reference_gcm || self.reference_gms)
    }
}
