//! End-to-end editor flow: load a draft from an event, edit it, persist
//! it as a whole-object replace, and resolve the result the way the
//! public page does.

use marquee_core::editor::{apply_theme_switch, ThemeDraft, TicketInventory};
use marquee_core::event::{Event, TicketType, UpdateEventTheme};
use marquee_core::theme::content::Stat;
use marquee_core::theme::sections::SectionId;
use marquee_core::theme::template::{ThemeProperties, ThemeStatus, ThemeTemplate};
use marquee_core::theme::customization::{ColorPalette, ColorRole, FontSet};
use marquee_core::theme::resolve::resolve;
use serde_json::json;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn template(id: i64, hero_title: &str) -> ThemeTemplate {
    ThemeTemplate {
        id,
        name: format!("Template {id}"),
        description: None,
        category: None,
        status: ThemeStatus::Active,
        is_premium: false,
        price: 0.0,
        default_properties: ThemeProperties {
            colors: ColorPalette {
                primary: "#1a73e8".into(),
                secondary: "#5f6368".into(),
                background: "#ffffff".into(),
                text: "#202124".into(),
                accent: "#fbbc04".into(),
            },
            fonts: FontSet {
                heading: "Inter".into(),
                body: "Inter".into(),
            },
        },
        default_content: serde_json::from_value(json!({
            "hero": { "title": hero_title },
            "about": {
                "heading": "About",
                "stats": [{ "value": "10k+", "label": "Attendees" }]
            }
        }))
        .unwrap(),
        created_at: None,
        updated_at: None,
    }
}

fn event() -> Event {
    serde_json::from_value(json!({
        "id": 7,
        "tenantId": 1,
        "slug": "rustconf-2026",
        "name": "RustConf 2026",
        "themeId": 1,
        "themeContent": { "hero": { "title": "Old" } },
        "ticketTypes": [{
            "id": 42, "eventId": 7, "name": "GA", "price": 25.0,
            "quantity": 100, "sold": 12
        }]
    }))
    .unwrap()
}

/// The backend's documented behavior for `PUT /tenant-admin/events/:id`:
/// each supplied field replaces the stored object wholesale.
fn apply_update(event: &mut Event, payload: &UpdateEventTheme) {
    if payload.theme_id.is_some() {
        event.theme.theme_id = payload.theme_id;
    }
    if let Some(content) = &payload.theme_content {
        event.theme.theme_content = content.clone();
    }
    if let Some(customization) = &payload.theme_customization {
        event.theme.theme_customization = customization.clone();
    }
    if let Some(seo) = &payload.seo_settings {
        event.theme.seo_settings = seo.clone();
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn edit_save_reload_resolve_round_trip() {
    let template = template(1, "Default Title");
    let mut stored = event();

    // Edit in a draft: override copy, hide a section, pick a color.
    let mut draft = ThemeDraft::load(&stored);
    draft.hero_mut().subtitle = Some("Now with more lifetimes".into());
    draft.toggle_visibility(SectionId::Gallery);
    draft.set_color(ColorRole::Primary, Some("#112233".into())).unwrap();
    draft.seo_mut().meta_title = Some("RustConf 2026".into());

    // Save, reload, and the next draft sees exactly what was saved.
    apply_update(&mut stored, &draft.save_payload());
    let reloaded = ThemeDraft::load(&stored);
    assert_eq!(reloaded, draft);

    // The public page agrees with the editors on the merged result.
    let view = resolve(&template, &stored.theme);
    assert_eq!(view.sections.hero.title.as_deref(), Some("Old"));
    assert_eq!(
        view.sections.hero.subtitle.as_deref(),
        Some("Now with more lifetimes")
    );
    assert!(view.sections.gallery.is_none());
    assert_eq!(view.style_overrides.colors.primary, "#112233");
    assert_eq!(view.site_info.title, "RustConf 2026");
}

#[test]
fn saving_twice_does_not_drift() {
    let mut stored = event();
    let mut draft = ThemeDraft::load(&stored);
    draft.add_stat(Stat {
        value: "50".into(),
        label: "Speakers".into(),
    });

    apply_update(&mut stored, &draft.save_payload());
    let after_first = stored.clone();
    apply_update(&mut stored, &draft.save_payload());

    // Full replace is idempotent: no duplicated list items, no drift.
    assert_eq!(stored, after_first);
}

#[test]
fn theme_switch_resets_content_only_on_confirm() {
    let target = template(2, "New");
    let mut stored = event();

    // Declined: nothing changes, the draft still points at template 1.
    let mut draft = ThemeDraft::load(&stored);
    assert!(!apply_theme_switch(&mut draft, &target, false));
    assert_eq!(draft.theme_id(), Some(1));
    assert_eq!(
        draft.content().hero.as_ref().unwrap().title.as_deref(),
        Some("Old")
    );

    // Confirmed: content reseeds from the new template and persists.
    assert!(apply_theme_switch(&mut draft, &target, true));
    apply_update(&mut stored, &draft.save_payload());
    assert_eq!(stored.theme.theme_id, Some(2));
    assert_eq!(
        stored
            .theme
            .theme_content
            .hero
            .as_ref()
            .unwrap()
            .title
            .as_deref(),
        Some("New")
    );
}

#[test]
fn stat_crud_through_a_full_save_cycle() {
    let mut stored = event();

    // Seed the stats list from the template, as first adoption does.
    let mut draft = ThemeDraft::load(&stored);
    apply_theme_switch(&mut draft, &template(1, "Default Title"), true);
    apply_update(&mut stored, &draft.save_payload());

    let mut draft = ThemeDraft::load(&stored);
    draft.add_stat(Stat {
        value: "50".into(),
        label: "Speakers".into(),
    });
    let stats = draft.content().about.as_ref().unwrap().stats.as_ref().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[1].label, "Speakers");

    draft.delete_stat(0).unwrap();
    apply_update(&mut stored, &draft.save_payload());

    let stats = stored
        .theme
        .theme_content
        .about
        .as_ref()
        .unwrap()
        .stats
        .as_ref()
        .unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].value, "50");
}

#[test]
fn inventory_edits_do_not_disturb_an_unsaved_draft() {
    let stored = event();
    let mut draft = ThemeDraft::load(&stored);
    let mut inventory = TicketInventory::from_event(&stored);

    // Unsaved theme edit sits in the draft...
    draft.hero_mut().title = Some("Unsaved".into());
    draft.add_ticket_feature(42, "Front row".into());

    // ...while a ticket save lands through its own endpoint. The screen
    // reconciles the returned record in memory instead of re-fetching
    // the event (which would rebuild the draft and drop the edit).
    let renamed: TicketType = serde_json::from_value(json!({
        "id": 42, "eventId": 7, "name": "General Admission",
        "price": 30.0, "quantity": 100, "sold": 12
    }))
    .unwrap();
    inventory.apply_saved(renamed);

    assert_eq!(inventory.items()[0].name, "General Admission");
    assert_eq!(draft.content().hero.as_ref().unwrap().title.as_deref(), Some("Unsaved"));

    // Deleting a ticket type drops its bullets from the draft as well.
    inventory.apply_deleted(42);
    draft.remove_ticket_features(42);
    assert!(draft.content().ticket_features.is_empty());
}
