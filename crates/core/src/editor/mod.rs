//! Draft-based editing of event theme state.

pub mod draft;
pub mod inventory;
pub mod lists;
pub mod switch;

pub use draft::ThemeDraft;
pub use inventory::TicketInventory;
pub use switch::apply_theme_switch;
