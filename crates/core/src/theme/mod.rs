//! Theme templates, per-event overrides, and the content resolver.

pub mod content;
pub mod customization;
pub mod resolve;
pub mod sections;
pub mod template;
pub mod visibility;

pub use resolve::{resolve, resolve_public, ResolvedView};
pub use sections::SectionId;
pub use template::ThemeTemplate;
