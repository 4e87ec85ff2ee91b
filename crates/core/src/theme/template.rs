//! Theme templates: platform-authored visual styles with default content.
//!
//! Templates are created and edited by platform admins and are immutable
//! from the tenant side; events reference exactly one template at a time
//! and layer their own overrides on top of it.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::content::SectionContent;
use super::customization::{ColorPalette, FontSet, ALL_COLOR_ROLES};
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

/// Maximum length for a template name.
pub const MAX_TEMPLATE_NAME_LEN: usize = 200;

/// Maximum length for a template description.
pub const MAX_TEMPLATE_DESCRIPTION_LEN: usize = 2000;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Lifecycle status of a template in the platform catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStatus {
    Active,
    Inactive,
    Draft,
}

/// A template's default style tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProperties {
    pub colors: ColorPalette,
    pub fonts: FontSet,
}

/// A named, versioned visual style shared across tenants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTemplate {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: ThemeStatus,
    #[serde(default)]
    pub is_premium: bool,
    /// Price in the platform currency; meaningful only when `is_premium`.
    #[serde(default)]
    pub price: f64,
    pub default_properties: ThemeProperties,
    /// Complete default content, used to seed an event on adoption.
    #[serde(default)]
    pub default_content: SectionContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Purchases / entitlement
// ---------------------------------------------------------------------------

/// Status of a tenant's template purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Active,
    Expired,
    Refunded,
}

/// One entry of the tenant's purchased-themes catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedTheme {
    pub theme: ThemeTemplate,
    pub status: PurchaseStatus,
    pub purchased_at: Timestamp,
}

/// Whether a tenant may adopt this template for an event.
///
/// Free active templates are always adoptable; premium templates require
/// an active purchase. Editors filter their template pickers with this so
/// a `themeId` the tenant is not entitled to never reaches a save.
pub fn is_adoptable(template: &ThemeTemplate, purchased: &[PurchasedTheme]) -> bool {
    if template.status != ThemeStatus::Active {
        return false;
    }
    if !template.is_premium {
        return true;
    }
    purchased
        .iter()
        .any(|p| p.theme.id == template.id && p.status == PurchaseStatus::Active)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color pattern")
    })
}

/// Validate a template name: non-empty after trimming and within length
/// limits.
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Template name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TEMPLATE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Template name too long: {} chars (max {MAX_TEMPLATE_NAME_LEN})",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Validate a hex color value: `#RGB` or `#RRGGBB`.
pub fn validate_hex_color(value: &str) -> Result<(), CoreError> {
    if hex_color_re().is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid hex color '{value}'. Expected #RGB or #RRGGBB"
        )))
    }
}

/// Validate premium pricing: the price must not be negative, and only
/// premium templates may carry a non-zero price.
pub fn validate_pricing(is_premium: bool, price: f64) -> Result<(), CoreError> {
    if price < 0.0 || !price.is_finite() {
        return Err(CoreError::Validation(format!(
            "Template price must be a non-negative number, got {price}"
        )));
    }
    if !is_premium && price > 0.0 {
        return Err(CoreError::Validation(
            "Only premium templates may have a price".to_string(),
        ));
    }
    Ok(())
}

/// Validate a complete template: name, pricing, and every default color.
pub fn validate_template(template: &ThemeTemplate) -> Result<(), CoreError> {
    validate_template_name(&template.name)?;
    validate_pricing(template.is_premium, template.price)?;
    for role in ALL_COLOR_ROLES {
        validate_hex_color(template.default_properties.colors.get(*role))?;
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
