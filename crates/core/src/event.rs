//! Event entities and the theme state embedded in them.
//!
//! Mirrors the backend's wire format: the theme fields (`themeId`,
//! `themeContent`, `themeCustomization`, `seoSettings`) sit flat on the
//! event record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::theme::content::SectionContent;
use crate::theme::customization::ThemeCustomization;
use crate::theme::template::ThemeTemplate;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Theme state
// ---------------------------------------------------------------------------

/// SEO metadata carried alongside the theme, independent of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// The per-event theme override data layered on top of a template.
///
/// Created empty at event creation, seeded from the template's default
/// content on first adoption, replaced whole on every save, and deleted
/// with the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventThemeState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<DbId>,
    pub theme_customization: ThemeCustomization,
    pub theme_content: SectionContent,
    pub seo_settings: SeoSettings,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A ticket inventory entry. Lives on its own endpoints; theme content
/// only cross-references it via `ticketFeatures[ticketTypeId]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub sold: i32,
}

/// A schedule entry; read-only from the theme editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSession {
    pub id: DbId,
    pub event_id: DbId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_name: Option<String>,
}

/// A full event record as returned by `GET /tenant-admin/events/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub tenant_id: DbId,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
    /// Ordered gallery image URLs; the gallery section's copy lives in
    /// theme content, the images live here.
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(flatten)]
    pub theme: EventThemeState,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub sessions: Vec<EventSession>,
}

/// Tenant identity embedded in public event payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// An event as returned by `GET /public/events/:slug`: the event plus its
/// tenant and (when assigned) the adopted theme template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    #[serde(flatten)]
    pub event: Event,
    pub tenant: Tenant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeTemplate>,
}

// ---------------------------------------------------------------------------
// Mutation payloads
// ---------------------------------------------------------------------------

/// Body of `PUT /tenant-admin/events/:id`.
///
/// Full-object replace semantics per field supplied: a present field
/// replaces the stored object wholesale, an absent field leaves it
/// untouched. There is no field-level patching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEventTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_content: Option<SectionContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_customization: Option<ThemeCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_settings: Option<SeoSettings>,
}

/// DTO for creating a ticket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketType {
    pub event_id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// DTO for partially updating a ticket type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTicketType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a partial ticket type update: only supplied fields are
/// checked, with the same rules as [`validate_ticket_type`].
pub fn validate_ticket_type_update(input: &UpdateTicketType) -> Result<(), CoreError> {
    if let Some(name) = input.name.as_deref() {
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Ticket type name must not be empty".to_string(),
            ));
        }
    }
    if let Some(price) = input.price {
        if price < 0.0 || !price.is_finite() {
            return Err(CoreError::Validation(format!(
                "Ticket price must be a non-negative number, got {price}"
            )));
        }
    }
    if let Some(quantity) = input.quantity {
        if quantity < 0 {
            return Err(CoreError::Validation(format!(
                "Ticket quantity must not be negative, got {quantity}"
            )));
        }
    }
    Ok(())
}

/// Validate a ticket type payload: non-empty name, non-negative price and
/// quantity.
pub fn validate_ticket_type(name: &str, price: f64, quantity: i32) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Ticket type name must not be empty".to_string(),
        ));
    }
    if price < 0.0 || !price.is_finite() {
        return Err(CoreError::Validation(format!(
            "Ticket price must be a non-negative number, got {price}"
        )));
    }
    if quantity < 0 {
        return Err(CoreError::Validation(format!(
            "Ticket quantity must not be negative, got {quantity}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_theme_fields_sit_flat_on_the_record() {
        let event: Event = serde_json::from_value(json!({
            "id": 7,
            "tenantId": 1,
            "slug": "rustconf-2026",
            "name": "RustConf 2026",
            "themeId": 3,
            "themeContent": { "hero": { "title": "Hello" } },
            "themeCustomization": { "colors": { "primary": "#112233" } },
            "seoSettings": { "metaTitle": "RustConf" },
            "gallery": ["https://cdn.example.com/1.jpg"]
        }))
        .unwrap();

        assert_eq!(event.theme.theme_id, Some(3));
        assert_eq!(
            event.theme.theme_content.hero.as_ref().unwrap().title.as_deref(),
            Some("Hello")
        );
        assert_eq!(
            event.theme.seo_settings.meta_title.as_deref(),
            Some("RustConf")
        );
        assert_eq!(event.gallery.len(), 1);
    }

    #[test]
    fn event_with_no_theme_state_defaults_to_empty() {
        // Backend records created before any theme adoption omit all theme
        // fields; accessors must still work.
        let event: Event = serde_json::from_value(json!({
            "id": 8,
            "tenantId": 1,
            "slug": "meetup",
            "name": "Meetup"
        }))
        .unwrap();

        assert_eq!(event.theme.theme_id, None);
        assert_eq!(event.theme.theme_content, SectionContent::default());
        assert!(event.ticket_types.is_empty());
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let payload = UpdateEventTheme {
            theme_content: Some(SectionContent::default()),
            ..UpdateEventTheme::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("themeContent").is_some());
        assert!(json.get("themeId").is_none());
        assert!(json.get("themeCustomization").is_none());
    }

    #[test]
    fn ticket_type_validation() {
        assert!(validate_ticket_type("GA", 25.0, 100).is_ok());
        assert!(validate_ticket_type("", 25.0, 100).is_err());
        assert!(validate_ticket_type("GA", -1.0, 100).is_err());
        assert!(validate_ticket_type("GA", 25.0, -1).is_err());
    }
}
