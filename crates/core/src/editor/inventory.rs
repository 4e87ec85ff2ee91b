//! Optimistic in-memory view of an event's ticket inventory.
//!
//! The quick-customize panel shows ticket types next to the theme editor.
//! Inventory mutations save through their own entity endpoints; after one
//! succeeds, the screen updates this list with the returned record instead
//! of re-fetching the whole event — a re-fetch would discard the unsaved
//! theme draft sitting next to it.

use crate::event::{Event, TicketType};
use crate::types::DbId;

/// The ticket types currently displayed alongside a theme draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketInventory {
    items: Vec<TicketType>,
}

impl TicketInventory {
    pub fn from_event(event: &Event) -> Self {
        Self {
            items: event.ticket_types.clone(),
        }
    }

    pub fn items(&self) -> &[TicketType] {
        &self.items
    }

    /// Reconcile a saved ticket type: replace the matching entry or, for
    /// a newly created one, append it.
    pub fn apply_saved(&mut self, ticket: TicketType) {
        match self.items.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => self.items.push(ticket),
        }
    }

    /// Reconcile a deletion. Returns whether an entry was removed.
    pub fn apply_deleted(&mut self, ticket_type_id: DbId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != ticket_type_id);
        self.items.len() != before
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
