//! Style tokens and their per-event overrides.

use serde::{Deserialize, Serialize};

use super::visibility::VisibilityMap;

// ---------------------------------------------------------------------------
// Color and font roles
// ---------------------------------------------------------------------------

/// Semantic color roles a template defines and an event may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Text,
    Accent,
}

/// All color roles, in the order editors present them.
pub const ALL_COLOR_ROLES: &[ColorRole] = &[
    ColorRole::Primary,
    ColorRole::Secondary,
    ColorRole::Background,
    ColorRole::Text,
    ColorRole::Accent,
];

/// Font roles a template defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Heading,
    Body,
}

// ---------------------------------------------------------------------------
// Complete token sets (template defaults)
// ---------------------------------------------------------------------------

/// A template's complete color palette: hex values per semantic role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl ColorPalette {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
            ColorRole::Accent => &self.accent,
        }
    }

    pub fn set(&mut self, role: ColorRole, value: String) {
        match role {
            ColorRole::Primary => self.primary = value,
            ColorRole::Secondary => self.secondary = value,
            ColorRole::Background => self.background = value,
            ColorRole::Text => self.text = value,
            ColorRole::Accent => self.accent = value,
        }
    }
}

/// A template's complete font assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

impl FontSet {
    pub fn get(&self, role: FontRole) -> &str {
        match role {
            FontRole::Heading => &self.heading,
            FontRole::Body => &self.body,
        }
    }
}

// ---------------------------------------------------------------------------
// Sparse overrides (event-level)
// ---------------------------------------------------------------------------

/// Per-event color overrides. Only overridden roles are present; an absent
/// or empty value falls back to the template default for that role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ColorOverrides {
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        match role {
            ColorRole::Primary => self.primary.as_deref(),
            ColorRole::Secondary => self.secondary.as_deref(),
            ColorRole::Background => self.background.as_deref(),
            ColorRole::Text => self.text.as_deref(),
            ColorRole::Accent => self.accent.as_deref(),
        }
    }

    pub fn set(&mut self, role: ColorRole, value: Option<String>) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Background => &mut self.background,
            ColorRole::Text => &mut self.text,
            ColorRole::Accent => &mut self.accent,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        ALL_COLOR_ROLES.iter().all(|role| self.get(*role).is_none())
    }
}

/// Per-event font overrides. No editor surface writes these yet; the
/// schema carries them so the resolver does not preclude per-event fonts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl FontOverrides {
    pub fn get(&self, role: FontRole) -> Option<&str> {
        match role {
            FontRole::Heading => self.heading.as_deref(),
            FontRole::Body => self.body.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// The full customization record
// ---------------------------------------------------------------------------

/// An event's `themeCustomization`: style token overrides plus section
/// visibility flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeCustomization {
    pub colors: ColorOverrides,
    pub fonts: FontOverrides,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "VisibilityMap::is_empty")]
    pub section_visibility: VisibilityMap,
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
