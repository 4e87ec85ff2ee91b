//! The content resolver: merges a theme template with an event's overrides
//! into the single view model every rendering surface consumes.
//!
//! Resolution is a pure function. Same inputs, same output; no I/O and no
//! mutation of either input. The admin quick editor, the dedicated theme
//! editor, and the live public page all render from [`ResolvedView`], so
//! the merge rules live here and nowhere else:
//!
//! * style tokens: a per-role override wins when present and non-empty,
//!   otherwise the template default;
//! * scalar content: an override wins when present — an explicit empty
//!   string is "present" and clears the inherited text;
//! * lists (`stats`, `features`, `speakers`, `faq`): replaced wholesale
//!   when the event defines the list at all (even as `[]`), never merged
//!   element-wise;
//! * visibility: hidden toggleable sections are excluded from the output;
//!   `branding`, `hero`, and `footer` are always included.

use std::collections::BTreeMap;

use serde::Serialize;

use super::content::{
    AboutContent, FaqContent, FeaturesContent, FooterContent, GalleryContent, HeroContent,
    ScheduleContent, SocialLinks, SpeakersContent, TicketsContent, VenueContent,
};
use super::customization::{ColorPalette, FontSet, ALL_COLOR_ROLES};
use super::sections::SectionId;
use super::template::ThemeTemplate;
use crate::error::CoreError;
use crate::event::{EventThemeState, PublicEvent};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Output contract
// ---------------------------------------------------------------------------

/// Fully resolved style tokens handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub colors: ColorPalette,
    pub fonts: FontSet,
}

/// Resolved asset URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_banner_url: Option<String>,
}

/// Page-level metadata for the rendered site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub social_links: SocialLinks,
}

/// Resolved content per section. `None` means the section is hidden;
/// `hero` and `footer` are structural and always present (`branding` is
/// carried by [`ResolvedStyle`] and [`ResolvedAssets`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSections {
    pub hero: HeroContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<TicketsContent>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ticket_features: BTreeMap<DbId, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<SpeakersContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqContent>,
    pub footer: FooterContent,
}

/// The fully merged, visibility-filtered structure handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedView {
    pub style_overrides: ResolvedStyle,
    pub assets: ResolvedAssets,
    pub site_info: SiteInfo,
    pub sections: ResolvedSections,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Merge a template with an event's theme state into a [`ResolvedView`].
pub fn resolve(template: &ThemeTemplate, state: &EventThemeState) -> ResolvedView {
    let defaults = &template.default_content;
    let overrides = &state.theme_content;
    let customization = &state.theme_customization;
    let visibility = &customization.section_visibility;

    // --- style tokens ---
    let mut colors = template.default_properties.colors.clone();
    for role in ALL_COLOR_ROLES {
        if let Some(value) = customization.colors.get(*role) {
            if !value.is_empty() {
                colors.set(*role, value.to_string());
            }
        }
    }
    let fonts = FontSet {
        heading: pick_token(
            customization.fonts.heading.as_deref(),
            &template.default_properties.fonts.heading,
        ),
        body: pick_token(
            customization.fonts.body.as_deref(),
            &template.default_properties.fonts.body,
        ),
    };

    // --- always-on sections ---
    let hero = merge_hero(defaults.hero.as_ref(), overrides.hero.as_ref());
    let footer = merge_footer(defaults.footer.as_ref(), overrides.footer.as_ref());

    // --- toggleable sections ---
    let about = visibility
        .renders(SectionId::About)
        .then(|| merge_about(defaults.about.as_ref(), overrides.about.as_ref()));
    let features = visibility.renders(SectionId::Features).then(|| {
        merge_features(
            defaults.features.as_ref().map(|f| f.to_canonical()).as_ref(),
            overrides.features.as_ref().map(|f| f.to_canonical()).as_ref(),
        )
    });
    let tickets_visible = visibility.renders(SectionId::Tickets);
    let tickets = tickets_visible
        .then(|| merge_tickets(defaults.tickets.as_ref(), overrides.tickets.as_ref()));
    let ticket_features = if tickets_visible {
        overrides.ticket_features.clone()
    } else {
        BTreeMap::new()
    };
    let schedule = visibility
        .renders(SectionId::Schedule)
        .then(|| merge_schedule(defaults.schedule.as_ref(), overrides.schedule.as_ref()));
    let speakers = visibility.renders(SectionId::Speakers).then(|| {
        merge_speakers(
            defaults.speakers.as_ref().map(|s| s.to_canonical()).as_ref(),
            overrides.speakers.as_ref().map(|s| s.to_canonical()).as_ref(),
        )
    });
    let venue = visibility
        .renders(SectionId::Venue)
        .then(|| merge_venue(defaults.venue.as_ref(), overrides.venue.as_ref()));
    let gallery = visibility
        .renders(SectionId::Gallery)
        .then(|| merge_gallery(defaults.gallery.as_ref(), overrides.gallery.as_ref()));
    let faq = visibility.renders(SectionId::Faq).then(|| {
        merge_faq(
            defaults.faq.as_ref().map(|f| f.to_canonical()).as_ref(),
            overrides.faq.as_ref().map(|f| f.to_canonical()).as_ref(),
        )
    });

    let site_info = SiteInfo {
        title: state.seo_settings.meta_title.clone().unwrap_or_default(),
        description: state.seo_settings.meta_description.clone(),
        contact_email: None,
        social_links: footer.socials.clone().unwrap_or_default(),
    };

    ResolvedView {
        assets: ResolvedAssets {
            logo_url: customization.logo.clone(),
            hero_banner_url: hero.background_image.clone(),
        },
        style_overrides: ResolvedStyle { colors, fonts },
        site_info,
        sections: ResolvedSections {
            hero,
            about,
            features,
            tickets,
            ticket_features,
            schedule,
            speakers,
            venue,
            gallery,
            faq,
            footer,
        },
    }
}

/// Resolve a public event payload for the live page.
///
/// Fails with [`CoreError::MissingTheme`] when the event has no embedded
/// template; the page shows a theme-not-assigned state for that instead
/// of crashing. The failure is isolated to this event's render.
pub fn resolve_public(public: &PublicEvent) -> Result<ResolvedView, CoreError> {
    let template = public.theme.as_ref().ok_or(CoreError::MissingTheme)?;
    let mut view = resolve(template, &public.event.theme);

    // Page metadata falls back to the event record and tenant identity.
    if view.site_info.title.is_empty() {
        view.site_info.title = public.event.name.clone();
    }
    if view.site_info.description.is_none() {
        view.site_info.description = public.event.description.clone();
    }
    view.site_info.contact_email = public.tenant.contact_email.clone();

    Ok(view)
}

// ---------------------------------------------------------------------------
// Merge helpers
// ---------------------------------------------------------------------------

/// Scalar precedence: a present override wins, including an explicit empty
/// string (operators use that to clear inherited text).
fn pick(over: &Option<String>, default: &Option<String>) -> Option<String> {
    if over.is_some() {
        over.clone()
    } else {
        default.clone()
    }
}

/// Style-token precedence: only a non-empty override wins.
fn pick_token(over: Option<&str>, default: &str) -> String {
    match over {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

fn merge_hero(default: Option<&HeroContent>, over: Option<&HeroContent>) -> HeroContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    HeroContent {
        title: pick(&o.title, &d.title),
        subtitle: pick(&o.subtitle, &d.subtitle),
        cta_text: pick(&o.cta_text, &d.cta_text),
        cta_link: pick(&o.cta_link, &d.cta_link),
        background_image: pick(&o.background_image, &d.background_image),
    }
}

fn merge_about(default: Option<&AboutContent>, over: Option<&AboutContent>) -> AboutContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    AboutContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        content: pick(&o.content, &d.content),
        image: pick(&o.image, &d.image),
        stats: if o.stats.is_some() {
            o.stats.clone()
        } else {
            d.stats.clone()
        },
    }
}

fn merge_features(
    default: Option<&FeaturesContent>,
    over: Option<&FeaturesContent>,
) -> FeaturesContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    FeaturesContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        features: if o.features.is_some() {
            o.features.clone()
        } else {
            d.features.clone()
        },
    }
}

fn merge_tickets(default: Option<&TicketsContent>, over: Option<&TicketsContent>) -> TicketsContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    TicketsContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        description: pick(&o.description, &d.description),
    }
}

fn merge_schedule(
    default: Option<&ScheduleContent>,
    over: Option<&ScheduleContent>,
) -> ScheduleContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    ScheduleContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        description: pick(&o.description, &d.description),
    }
}

fn merge_speakers(
    default: Option<&SpeakersContent>,
    over: Option<&SpeakersContent>,
) -> SpeakersContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    SpeakersContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        speakers: if o.speakers.is_some() {
            o.speakers.clone()
        } else {
            d.speakers.clone()
        },
    }
}

fn merge_venue(default: Option<&VenueContent>, over: Option<&VenueContent>) -> VenueContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    VenueContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        address: pick(&o.address, &d.address),
        map_url: pick(&o.map_url, &d.map_url),
        directions: pick(&o.directions, &d.directions),
        parking: pick(&o.parking, &d.parking),
    }
}

fn merge_gallery(default: Option<&GalleryContent>, over: Option<&GalleryContent>) -> GalleryContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    GalleryContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
    }
}

fn merge_faq(default: Option<&FaqContent>, over: Option<&FaqContent>) -> FaqContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    FaqContent {
        heading: pick(&o.heading, &d.heading),
        sub_heading: pick(&o.sub_heading, &d.sub_heading),
        description: pick(&o.description, &d.description),
        faq: if o.faq.is_some() {
            o.faq.clone()
        } else {
            d.faq.clone()
        },
    }
}

fn merge_footer(default: Option<&FooterContent>, over: Option<&FooterContent>) -> FooterContent {
    let d = default.cloned().unwrap_or_default();
    let Some(o) = over else { return d };
    FooterContent {
        copyright_text: pick(&o.copyright_text, &d.copyright_text),
        description: pick(&o.description, &d.description),
        socials: if o.socials.is_some() {
            o.socials.clone()
        } else {
            d.socials.clone()
        },
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
