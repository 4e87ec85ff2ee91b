//! Editable drafts of an event's theme state.
//!
//! All three editor surfaces (the inline quick-customize panel, the
//! dedicated theme editor, and the event-edit theme picker) work on a
//! [`ThemeDraft`]: a deep copy of the persisted state that is mutated
//! locally and only written back by an explicit save. A failed save
//! leaves the draft intact for retry.
//!
//! This module has zero I/O. The client layer ships
//! [`ThemeDraft::save_payload`] to the backend; nothing here touches the
//! network.

use crate::error::CoreError;
use crate::event::{Event, SeoSettings, UpdateEventTheme};
use crate::theme::content::{
    AboutContent, FaqContent, FeaturesContent, FooterContent, GalleryContent, HeroContent,
    ScheduleContent, SectionContent, SpeakersContent, TicketsContent, VenueContent,
};
use crate::theme::customization::{ColorRole, ThemeCustomization};
use crate::theme::sections::SectionId;
use crate::theme::template::validate_hex_color;
use crate::theme::visibility::{SectionVisibility, VisibilityMap};
use crate::types::DbId;

/// An in-memory, unsaved copy of an event's theme state.
///
/// Field access goes through typed per-section accessors. The `*_mut`
/// accessors lazily create the section record on first write and never
/// touch sibling sections, so editing one field cannot drop adjacent
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDraft {
    pub(crate) event_id: DbId,
    pub(crate) theme_id: Option<DbId>,
    pub(crate) customization: ThemeCustomization,
    pub(crate) content: SectionContent,
    pub(crate) seo: SeoSettings,
}

impl ThemeDraft {
    /// Deep-copy the event's current theme state into an editable draft.
    ///
    /// Absent theme structures initialize to their empty defaults, and
    /// legacy-shaped list sections are normalized to the canonical form,
    /// so every downstream accessor is safe.
    pub fn load(event: &Event) -> Self {
        Self {
            event_id: event.id,
            theme_id: event.theme.theme_id,
            customization: event.theme.theme_customization.clone(),
            content: event.theme.theme_content.normalized(),
            seo: event.theme.seo_settings.clone(),
        }
    }

    // -- read access --

    pub fn event_id(&self) -> DbId {
        self.event_id
    }

    pub fn theme_id(&self) -> Option<DbId> {
        self.theme_id
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    pub fn customization(&self) -> &ThemeCustomization {
        &self.customization
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.customization.section_visibility
    }

    pub fn seo(&self) -> &SeoSettings {
        &self.seo
    }

    // -- section accessors --

    pub fn hero_mut(&mut self) -> &mut HeroContent {
        self.content.hero.get_or_insert_with(HeroContent::default)
    }

    pub fn about_mut(&mut self) -> &mut AboutContent {
        self.content.about.get_or_insert_with(AboutContent::default)
    }

    pub fn features_mut(&mut self) -> &mut FeaturesContent {
        self.content
            .features
            .get_or_insert_with(Default::default)
            .canonical_mut()
    }

    pub fn tickets_mut(&mut self) -> &mut TicketsContent {
        self.content
            .tickets
            .get_or_insert_with(TicketsContent::default)
    }

    pub fn schedule_mut(&mut self) -> &mut ScheduleContent {
        self.content
            .schedule
            .get_or_insert_with(ScheduleContent::default)
    }

    pub fn speakers_mut(&mut self) -> &mut SpeakersContent {
        self.content
            .speakers
            .get_or_insert_with(Default::default)
            .canonical_mut()
    }

    pub fn venue_mut(&mut self) -> &mut VenueContent {
        self.content.venue.get_or_insert_with(VenueContent::default)
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryContent {
        self.content
            .gallery
            .get_or_insert_with(GalleryContent::default)
    }

    pub fn faq_mut(&mut self) -> &mut FaqContent {
        self.content
            .faq
            .get_or_insert_with(Default::default)
            .canonical_mut()
    }

    pub fn footer_mut(&mut self) -> &mut FooterContent {
        self.content
            .footer
            .get_or_insert_with(FooterContent::default)
    }

    pub fn seo_mut(&mut self) -> &mut SeoSettings {
        &mut self.seo
    }

    // -- style overrides --

    /// Override one color role, or clear the override with `None`.
    ///
    /// Values are validated as hex colors before they enter the draft, so
    /// a malformed value blocks the edit instead of failing at save time.
    pub fn set_color(&mut self, role: ColorRole, value: Option<String>) -> Result<(), CoreError> {
        if let Some(value) = value.as_deref() {
            if !value.is_empty() {
                validate_hex_color(value)?;
            }
        }
        self.customization.colors.set(role, value);
        Ok(())
    }

    pub fn set_logo(&mut self, url: Option<String>) {
        self.customization.logo = url;
    }

    // -- visibility --

    /// Toggle a section's visibility. The first toggle of an unstored
    /// section hides it; structural sections never toggle (returns
    /// `None`).
    pub fn toggle_visibility(&mut self, id: SectionId) -> Option<SectionVisibility> {
        self.customization.section_visibility.toggle(id)
    }

    // -- persistence --

    /// Assemble the full-replace save body.
    ///
    /// The backend replaces each supplied object wholesale, so the draft
    /// ships its entire content, customization, and SEO state on every
    /// save. Building the payload does not consume or alter the draft:
    /// saving the same draft twice produces identical payloads, and a
    /// failed save leaves the draft usable for retry.
    pub fn save_payload(&self) -> UpdateEventTheme {
        UpdateEventTheme {
            theme_id: self.theme_id,
            theme_content: Some(self.content.clone()),
            theme_customization: Some(self.customization.clone()),
            seo_settings: Some(self.seo.clone()),
        }
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn event(theme_json: serde_json::Value) -> Event {
        let mut value = json!({
            "id": 7,
            "tenantId": 1,
            "slug": "rustconf",
            "name": "RustConf 2026"
        });
        value
            .as_object_mut()
            .unwrap()
            .extend(theme_json.as_object().unwrap().clone());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn load_initializes_missing_structures() {
        let draft = ThemeDraft::load(&event(json!({})));
        assert_eq!(draft.theme_id(), None);
        assert_eq!(*draft.content(), SectionContent::default());
        assert!(draft.visibility().is_empty());
    }

    #[test]
    fn load_normalizes_legacy_shapes() {
        let draft = ThemeDraft::load(&event(json!({
            "themeContent": { "features": [{ "title": "A" }] }
        })));
        let serialized = serde_json::to_value(draft.content()).unwrap();
        assert!(serialized["features"].is_object());
    }

    #[test]
    fn load_is_a_deep_copy() {
        let source = event(json!({ "themeContent": { "hero": { "title": "Original" } } }));
        let mut draft = ThemeDraft::load(&source);
        draft.hero_mut().title = Some("Edited".into());
        assert_eq!(
            source.theme.theme_content.hero.as_ref().unwrap().title.as_deref(),
            Some("Original")
        );
    }

    #[test]
    fn section_accessor_does_not_touch_siblings() {
        let mut draft = ThemeDraft::load(&event(json!({
            "themeContent": {
                "hero": { "title": "Keep me" },
                "about": { "heading": "Also keep me" }
            }
        })));
        draft.hero_mut().subtitle = Some("New subtitle".into());

        let content = draft.content();
        assert_eq!(content.hero.as_ref().unwrap().title.as_deref(), Some("Keep me"));
        assert_eq!(
            content.about.as_ref().unwrap().heading.as_deref(),
            Some("Also keep me")
        );
    }

    #[test]
    fn section_accessor_is_idempotent() {
        let mut draft = ThemeDraft::load(&event(json!({})));
        draft.venue_mut().address = Some("1 Main St".into());
        // A second access returns the same record, not a fresh default.
        assert_eq!(draft.venue_mut().address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn clearing_text_stores_explicit_empty_string() {
        let mut draft = ThemeDraft::load(&event(json!({})));
        draft.hero_mut().title = Some(String::new());
        let serialized = serde_json::to_value(draft.content()).unwrap();
        assert_eq!(serialized["hero"]["title"], "");
    }

    #[test]
    fn set_color_validates_hex() {
        let mut draft = ThemeDraft::load(&event(json!({})));
        assert!(draft.set_color(ColorRole::Primary, Some("#123456".into())).is_ok());
        assert_matches!(
            draft.set_color(ColorRole::Primary, Some("red".into())),
            Err(CoreError::Validation(_))
        );
        // The failed edit did not overwrite the previous value.
        assert_eq!(
            draft.customization().colors.get(ColorRole::Primary),
            Some("#123456")
        );
        assert!(draft.set_color(ColorRole::Primary, None).is_ok());
    }

    #[test]
    fn toggle_visibility_follows_section_policy() {
        let mut draft = ThemeDraft::load(&event(json!({})));
        assert_eq!(
            draft.toggle_visibility(SectionId::Gallery),
            Some(SectionVisibility::Hidden)
        );
        assert_eq!(draft.toggle_visibility(SectionId::Hero), None);
    }

    #[test]
    fn save_payload_is_idempotent_and_full_replace() {
        let mut draft = ThemeDraft::load(&event(json!({
            "themeId": 3,
            "themeContent": { "hero": { "title": "Hello" } }
        })));
        draft.seo_mut().meta_title = Some("Hello | RustConf".into());

        let first = draft.save_payload();
        let second = draft.save_payload();
        assert_eq!(first, second);

        assert_eq!(first.theme_id, Some(3));
        // Whole objects ship even for untouched parts.
        assert!(first.theme_customization.is_some());
        assert_eq!(
            first.seo_settings.as_ref().unwrap().meta_title.as_deref(),
            Some("Hello | RustConf")
        );
    }
}
