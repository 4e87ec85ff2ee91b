//! Section identifiers for the public event page.
//!
//! A section is a named, independently toggleable region of an event's
//! public page. `branding`, `hero`, and `footer` are structural: the page
//! always renders them and no editor surface offers a visibility control
//! for them.

use serde::{Deserialize, Serialize};

/// Identifier of one region of the public event page.
///
/// Serialized in lowercase, matching the keys the backend stores in
/// `sectionVisibility` and `themeContent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Branding,
    Hero,
    About,
    Features,
    Tickets,
    Schedule,
    Speakers,
    Venue,
    Gallery,
    Faq,
    Footer,
}

/// Every section, in display order.
pub const ALL_SECTIONS: &[SectionId] = &[
    SectionId::Branding,
    SectionId::Hero,
    SectionId::About,
    SectionId::Features,
    SectionId::Tickets,
    SectionId::Schedule,
    SectionId::Speakers,
    SectionId::Venue,
    SectionId::Gallery,
    SectionId::Faq,
    SectionId::Footer,
];

/// Sections that carry a visibility toggle in the editors.
pub const TOGGLEABLE_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Features,
    SectionId::Tickets,
    SectionId::Schedule,
    SectionId::Speakers,
    SectionId::Venue,
    SectionId::Gallery,
    SectionId::Faq,
];

impl SectionId {
    /// Wire name of the section (the JSON key).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Branding => "branding",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Features => "features",
            Self::Tickets => "tickets",
            Self::Schedule => "schedule",
            Self::Speakers => "speakers",
            Self::Venue => "venue",
            Self::Gallery => "gallery",
            Self::Faq => "faq",
            Self::Footer => "footer",
        }
    }

    /// Human-readable label for editor UIs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Features => "Features",
            Self::Tickets => "Tickets",
            Self::Schedule => "Schedule",
            Self::Speakers => "Speakers",
            Self::Venue => "Venue",
            Self::Gallery => "Gallery",
            Self::Faq => "FAQ",
            Self::Footer => "Footer",
        }
    }

    /// Whether editors may hide this section.
    ///
    /// `branding`, `hero`, and `footer` are always rendered: a stored
    /// visibility flag for them is ignored by the resolver, and toggling
    /// them is a no-op.
    pub fn is_toggleable(self) -> bool {
        TOGGLEABLE_SECTIONS.contains(&self)
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for &section in ALL_SECTIONS.iter() {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.as_str()));
            let back: SectionId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, section);
        }
    }

    #[test]
    fn structural_sections_are_not_toggleable() {
        assert!(!SectionId::Branding.is_toggleable());
        assert!(!SectionId::Hero.is_toggleable());
        assert!(!SectionId::Footer.is_toggleable());
    }

    #[test]
    fn content_sections_are_toggleable() {
        for &section in TOGGLEABLE_SECTIONS.iter() {
            assert!(section.is_toggleable(), "{} should toggle", section.as_str());
        }
    }

    #[test]
    fn toggleable_plus_structural_covers_all() {
        assert_eq!(TOGGLEABLE_SECTIONS.len() + 3, ALL_SECTIONS.len());
    }
}
