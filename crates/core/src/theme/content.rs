//! Section content structures shared by theme templates and event overrides.
//!
//! A template's `defaultContent` is a fully populated [`SectionContent`];
//! an event's `themeContent` is a sparse instance of the same shape. Every
//! scalar field is an `Option` so that "absent" (fall back to the template
//! default) and "explicitly empty" (override to blank) stay distinguishable
//! on the wire.
//!
//! Historical data stores the `features`, `speakers`, and `faq` sections in
//! two shapes: a bare array at the section key, or an object that nests the
//! list under the same key next to `heading`/`subHeading`. Both shapes are
//! accepted when reading; [`SectionContent::normalize`] rewrites to the
//! canonical nested form so writers only ever deal with one shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// List item types
// ---------------------------------------------------------------------------

/// One entry of the about section's statistics strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One entry of the features grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Social profile links, used by speakers and the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One entry of the speakers grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Speaker {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub social: SocialLinks,
}

/// One question/answer pair of the FAQ section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Per-section content
// ---------------------------------------------------------------------------

/// Hero banner copy and call-to-action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// About section: prose plus the statistics strip.
///
/// `stats` is positional: items are addressed by index and deleting index
/// `k` shifts everything after it. `Some(vec![])` means "override the
/// template's stats with an empty list"; `None` means "inherit".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
}

/// Features section in its canonical nested form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturesContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

/// Tickets section copy. The inventory itself (names, prices, quantities)
/// lives on `TicketType` entities; only per-ticket marketing bullet points
/// are stored in theme content, keyed by ticket type id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Schedule section copy. Session entries come from `EventSession`
/// entities and are read-only from the theme editors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Speakers section in its canonical nested form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakersContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
}

/// Venue section. The venue name and city live on the event entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,
}

/// Gallery section copy. Image URLs live on `Event.gallery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
}

/// FAQ section in its canonical nested form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqItem>>,
}

/// Footer copy and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<SocialLinks>,
}

// ---------------------------------------------------------------------------
// Dual-shape list sections
// ---------------------------------------------------------------------------

/// The features section as stored: either the legacy bare array or the
/// canonical nested object. [`canonical_mut`](Self::canonical_mut) rewrites
/// legacy data in place, so after [`SectionContent::normalize`] only the
/// canonical form exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeaturesField {
    Legacy(Vec<Feature>),
    Canonical(FeaturesContent),
}

/// The speakers section as stored; see [`FeaturesField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeakersField {
    Legacy(Vec<Speaker>),
    Canonical(SpeakersContent),
}

/// The FAQ section as stored; see [`FeaturesField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaqField {
    Legacy(Vec<FaqItem>),
    Canonical(FaqContent),
}

macro_rules! impl_dual_shape {
    ($field:ident, $section:ident, $list:ident) => {
        impl $field {
            /// Rewrite to the canonical nested form and return it mutably.
            pub fn canonical_mut(&mut self) -> &mut $section {
                if let Self::Legacy(items) = self {
                    let items = std::mem::take(items);
                    *self = Self::Canonical($section {
                        $list: Some(items),
                        ..$section::default()
                    });
                }
                match self {
                    Self::Canonical(section) => section,
                    // Legacy was rewritten above.
                    Self::Legacy(_) => unreachable!("legacy shape rewritten to canonical"),
                }
            }

            /// View as the canonical form without mutating stored data.
            pub fn to_canonical(&self) -> $section {
                match self {
                    Self::Legacy(items) => $section {
                        $list: Some(items.clone()),
                        ..$section::default()
                    },
                    Self::Canonical(section) => section.clone(),
                }
            }
        }

        impl Default for $field {
            fn default() -> Self {
                Self::Canonical($section::default())
            }
        }

        impl From<$section> for $field {
            fn from(section: $section) -> Self {
                Self::Canonical(section)
            }
        }
    };
}

impl_dual_shape!(FeaturesField, FeaturesContent, features);
impl_dual_shape!(SpeakersField, SpeakersContent, speakers);
impl_dual_shape!(FaqField, FaqContent, faq);

// ---------------------------------------------------------------------------
// The full section content structure
// ---------------------------------------------------------------------------

/// Content for every section of the public page, keyed by section id.
///
/// Used both as a template's complete `defaultContent` and as an event's
/// sparse `themeContent` override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<TicketsContent>,
    /// Marketing bullet points per ticket type, keyed by ticket type id.
    /// Lives here rather than on the `TicketType` record so theme edits and
    /// inventory edits can be saved independently.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ticket_features: BTreeMap<DbId, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<SpeakersField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterContent>,
}

impl SectionContent {
    /// Rewrite any legacy-shaped list sections to the canonical nested
    /// form. Applied once when content is loaded into an editor draft;
    /// idempotent.
    pub fn normalize(&mut self) {
        if let Some(features) = self.features.as_mut() {
            features.canonical_mut();
        }
        if let Some(speakers) = self.speakers.as_mut() {
            speakers.canonical_mut();
        }
        if let Some(faq) = self.faq.as_mut() {
            faq.canonical_mut();
        }
    }

    /// A normalized deep copy, leaving `self` untouched.
    pub fn normalized(&self) -> SectionContent {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // --- dual-shape reads ---

    #[test]
    fn features_reads_legacy_flat_array() {
        let content: SectionContent =
            serde_json::from_value(json!({ "features": [{ "title": "A" }] })).unwrap();

        let canonical = content.features.unwrap().to_canonical();
        let features = canonical.features.unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].title, "A");
    }

    #[test]
    fn features_reads_canonical_nested_object() {
        let content: SectionContent = serde_json::from_value(json!({
            "features": { "heading": "Why attend", "features": [{ "title": "B" }] }
        }))
        .unwrap();

        let canonical = content.features.unwrap().to_canonical();
        assert_eq!(canonical.heading.as_deref(), Some("Why attend"));
        assert_eq!(canonical.features.unwrap()[0].title, "B");
    }

    #[test]
    fn faq_and_speakers_read_both_shapes() {
        let legacy: SectionContent = serde_json::from_value(json!({
            "faq": [{ "question": "Q", "answer": "A" }],
            "speakers": [{ "name": "Ada" }]
        }))
        .unwrap();
        assert_eq!(
            legacy.faq.unwrap().to_canonical().faq.unwrap()[0].question,
            "Q"
        );
        assert_eq!(
            legacy.speakers.unwrap().to_canonical().speakers.unwrap()[0].name,
            "Ada"
        );

        let nested: SectionContent = serde_json::from_value(json!({
            "faq": { "faq": [{ "question": "Q2", "answer": "A2" }] },
            "speakers": { "speakers": [{ "name": "Grace" }] }
        }))
        .unwrap();
        assert_eq!(
            nested.faq.unwrap().to_canonical().faq.unwrap()[0].question,
            "Q2"
        );
        assert_eq!(
            nested.speakers.unwrap().to_canonical().speakers.unwrap()[0].name,
            "Grace"
        );
    }

    // --- normalization ---

    #[test]
    fn normalize_rewrites_legacy_to_canonical() {
        let mut content: SectionContent =
            serde_json::from_value(json!({ "features": [{ "title": "A" }] })).unwrap();
        content.normalize();

        let serialized = serde_json::to_value(&content).unwrap();
        assert!(serialized["features"].is_object());
        assert_eq!(serialized["features"]["features"][0]["title"], "A");
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut content: SectionContent = serde_json::from_value(json!({
            "features": [{ "title": "A" }],
            "faq": { "heading": "FAQ", "faq": [] }
        }))
        .unwrap();
        content.normalize();
        let once = content.clone();
        content.normalize();
        assert_eq!(content, once);
    }

    // --- absence vs explicit empty ---

    #[test]
    fn empty_string_survives_round_trip_as_present() {
        let content: SectionContent =
            serde_json::from_value(json!({ "hero": { "title": "" } })).unwrap();
        let hero = content.hero.as_ref().unwrap();
        assert_eq!(hero.title.as_deref(), Some(""));
        assert!(hero.subtitle.is_none());

        let serialized = serde_json::to_value(&content).unwrap();
        assert_eq!(serialized["hero"]["title"], "");
        assert!(serialized["hero"].get("subtitle").is_none());
    }

    #[test]
    fn empty_content_serializes_to_empty_object() {
        let serialized = serde_json::to_value(SectionContent::default()).unwrap();
        assert_eq!(serialized, json!({}));
    }

    // --- ticket features ---

    #[test]
    fn ticket_features_keyed_by_ticket_type_id() {
        let content: SectionContent = serde_json::from_value(json!({
            "ticketFeatures": { "42": ["Front row", "Free drink"] }
        }))
        .unwrap();
        assert_eq!(
            content.ticket_features.get(&42).map(|f| f.len()),
            Some(2)
        );

        let serialized = serde_json::to_value(&content).unwrap();
        assert_eq!(serialized["ticketFeatures"]["42"][0], "Front row");
    }
}
