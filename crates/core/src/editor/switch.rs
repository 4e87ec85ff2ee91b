//! Template switching.
//!
//! Switching an event to a different template is destructive: the event's
//! content overrides are reset to the new template's defaults. Every
//! editor surface prompts the operator first and then applies one policy,
//! implemented here.

use super::draft::ThemeDraft;
use crate::theme::customization::ColorOverrides;
use crate::theme::template::ThemeTemplate;

/// Apply (or decline) a template switch on a draft.
///
/// With `confirmed`, the draft adopts the new template: `themeId` moves,
/// content is reset to a deep copy of the template's `defaultContent`,
/// and color overrides are cleared since they were picked against the old
/// palette. Visibility flags, the logo, and SEO settings survive the
/// switch. Without confirmation nothing changes — the draft keeps its
/// previous template and content untouched.
///
/// First-time adoption (an event with no theme yet) goes through the same
/// path with `confirmed = true`; there is nothing to lose, so UIs skip
/// the prompt.
///
/// Returns whether the switch was applied.
pub fn apply_theme_switch(
    draft: &mut ThemeDraft,
    new_template: &ThemeTemplate,
    confirmed: bool,
) -> bool {
    if !confirmed {
        return false;
    }

    draft.theme_id = Some(new_template.id);
    draft.content = new_template.default_content.normalized();
    draft.customization.colors = ColorOverrides::default();
    true
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::theme::customization::ColorRole;
    use crate::theme::sections::SectionId;
    use crate::theme::template::{ThemeProperties, ThemeStatus};
    use crate::theme::customization::{ColorPalette, FontSet};
    use serde_json::json;

    fn draft() -> ThemeDraft {
        let event: Event = serde_json::from_value(json!({
            "id": 7,
            "tenantId": 1,
            "slug": "rustconf",
            "name": "RustConf 2026",
            "themeId": 1,
            "themeContent": { "hero": { "title": "Old" } }
        }))
        .unwrap();
        ThemeDraft::load(&event)
    }

    fn template_b() -> ThemeTemplate {
        ThemeTemplate {
            id: 2,
            name: "Modern".into(),
            description: None,
            category: None,
            status: ThemeStatus::Active,
            is_premium: false,
            price: 0.0,
            default_properties: ThemeProperties {
                colors: ColorPalette {
                    primary: "#111111".into(),
                    secondary: "#222222".into(),
                    background: "#ffffff".into(),
                    text: "#000000".into(),
                    accent: "#ff00ff".into(),
                },
                fonts: FontSet {
                    heading: "Inter".into(),
                    body: "Inter".into(),
                },
            },
            default_content: serde_json::from_value(json!({
                "hero": { "title": "New" }
            }))
            .unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn confirmed_switch_resets_content_to_new_defaults() {
        let mut draft = draft();
        assert!(apply_theme_switch(&mut draft, &template_b(), true));

        assert_eq!(draft.theme_id(), Some(2));
        assert_eq!(
            draft.content().hero.as_ref().unwrap().title.as_deref(),
            Some("New")
        );
        let payload = draft.save_payload();
        assert_eq!(
            payload
                .theme_content
                .as_ref()
                .unwrap()
                .hero
                .as_ref()
                .unwrap()
                .title
                .as_deref(),
            Some("New")
        );
    }

    #[test]
    fn declined_switch_leaves_draft_untouched() {
        let mut draft = draft();
        let before = draft.clone();
        assert!(!apply_theme_switch(&mut draft, &template_b(), false));

        assert_eq!(draft, before);
        assert_eq!(draft.theme_id(), Some(1));
        assert_eq!(
            draft.content().hero.as_ref().unwrap().title.as_deref(),
            Some("Old")
        );
    }

    #[test]
    fn confirmed_switch_clears_color_overrides_but_keeps_visibility() {
        let mut draft = draft();
        draft.set_color(ColorRole::Primary, Some("#abcdef".into())).unwrap();
        draft.toggle_visibility(SectionId::Gallery);

        apply_theme_switch(&mut draft, &template_b(), true);

        assert!(draft.customization().colors.is_empty());
        assert!(!draft.visibility().renders(SectionId::Gallery));
    }
}
