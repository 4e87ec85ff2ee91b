//! Per-section visibility flags.
//!
//! Visibility is opt-out: a section with no stored flag is visible. The
//! wire format is a map of section id to boolean (`false` = hidden), but
//! in memory the state is an explicit [`SectionVisibility`] so the default
//! is documented in the type rather than implied by key absence. Once an
//! operator toggles a section, the flag is persisted explicitly in both
//! directions.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::sections::SectionId;

/// Whether a section renders on the public page.
///
/// `Visible` is the default: events start with no stored flags and every
/// section showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionVisibility {
    #[default]
    Visible,
    Hidden,
}

impl SectionVisibility {
    /// Flip between `Visible` and `Hidden`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

// Wire format: `true` = visible, `false` = hidden.
impl Serialize for SectionVisibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_visible())
    }
}

impl<'de> Deserialize<'de> for SectionVisibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visible = bool::deserialize(deserializer)?;
        Ok(if visible { Self::Visible } else { Self::Hidden })
    }
}

/// The stored `sectionVisibility` map of an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap(BTreeMap<SectionId, SectionVisibility>);

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored flag for a section; absent means visible.
    pub fn flag(&self, id: SectionId) -> SectionVisibility {
        self.0.get(&id).copied().unwrap_or_default()
    }

    /// Whether the resolver renders this section.
    ///
    /// Structural sections (`branding`, `hero`, `footer`) render regardless
    /// of any stored flag; old data may carry a `false` for them and it
    /// must not take effect.
    pub fn renders(&self, id: SectionId) -> bool {
        if !id.is_toggleable() {
            return true;
        }
        self.flag(id).is_visible()
    }

    /// Toggle a section and return the new flag, or `None` when the
    /// section is structural (toggling those is a no-op).
    ///
    /// The first toggle of an unstored section hides it, since absence
    /// means visible. The result is stored explicitly either way.
    pub fn toggle(&mut self, id: SectionId) -> Option<SectionVisibility> {
        if !id.is_toggleable() {
            return None;
        }
        let next = self.flag(id).toggled();
        self.0.insert(id, next);
        Some(next)
    }

    /// Set an explicit flag for a toggleable section; no-op otherwise.
    pub fn set(&mut self, id: SectionId, visibility: SectionVisibility) {
        if id.is_toggleable() {
            self.0.insert(id, visibility);
        }
    }

    /// Remove the stored flag, reverting the section to the default
    /// (visible).
    pub fn clear(&mut self, id: SectionId) {
        self.0.remove(&id);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionVisibility)> + '_ {
        self.0.iter().map(|(id, vis)| (*id, *vis))
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
