//! Positional list editing on a [`ThemeDraft`].
//!
//! Stats, features, speakers, FAQ entries, and per-ticket feature bullets
//! are ordered lists addressed by index: deleting index `k` shifts every
//! later item. Updates and deletes on an index that does not exist are
//! caller errors and never silently append. Every delete is destructive
//! to the draft; UIs must confirm with the operator before calling it.
//!
//! Adds append to the draft's own list for the section. Events seeded
//! from a template carry the template's list here, so "append to what is
//! displayed" holds; a draft that still inherits (list absent) starts a
//! fresh override list.

use super::draft::ThemeDraft;
use crate::error::CoreError;
use crate::theme::content::{FaqItem, Feature, Speaker, Stat};
use crate::types::DbId;

fn replace_at<T>(
    list: &mut [T],
    name: &'static str,
    index: usize,
    item: T,
) -> Result<(), CoreError> {
    let len = list.len();
    let slot = list
        .get_mut(index)
        .ok_or(CoreError::IndexOutOfRange { list: name, index, len })?;
    *slot = item;
    Ok(())
}

fn remove_at<T>(list: &mut Vec<T>, name: &'static str, index: usize) -> Result<T, CoreError> {
    if index >= list.len() {
        return Err(CoreError::IndexOutOfRange {
            list: name,
            index,
            len: list.len(),
        });
    }
    Ok(list.remove(index))
}

fn out_of_range<T>(name: &'static str, index: usize) -> Result<T, CoreError> {
    Err(CoreError::IndexOutOfRange {
        list: name,
        index,
        len: 0,
    })
}

impl ThemeDraft {
    // -- about stats --

    pub fn add_stat(&mut self, stat: Stat) {
        self.about_mut().stats.get_or_insert_with(Vec::new).push(stat);
    }

    pub fn update_stat(&mut self, index: usize, stat: Stat) -> Result<(), CoreError> {
        match self.content.about.as_mut().and_then(|a| a.stats.as_mut()) {
            Some(stats) => replace_at(stats, "about.stats", index, stat),
            None => out_of_range("about.stats", index),
        }
    }

    pub fn delete_stat(&mut self, index: usize) -> Result<Stat, CoreError> {
        match self.content.about.as_mut().and_then(|a| a.stats.as_mut()) {
            Some(stats) => remove_at(stats, "about.stats", index),
            None => out_of_range("about.stats", index),
        }
    }

    // -- features --

    pub fn add_feature(&mut self, feature: Feature) {
        self.features_mut()
            .features
            .get_or_insert_with(Vec::new)
            .push(feature);
    }

    pub fn update_feature(&mut self, index: usize, feature: Feature) -> Result<(), CoreError> {
        match self
            .content
            .features
            .as_mut()
            .and_then(|f| f.canonical_mut().features.as_mut())
        {
            Some(features) => replace_at(features, "features", index, feature),
            None => out_of_range("features", index),
        }
    }

    pub fn delete_feature(&mut self, index: usize) -> Result<Feature, CoreError> {
        match self
            .content
            .features
            .as_mut()
            .and_then(|f| f.canonical_mut().features.as_mut())
        {
            Some(features) => remove_at(features, "features", index),
            None => out_of_range("features", index),
        }
    }

    // -- speakers --

    pub fn add_speaker(&mut self, speaker: Speaker) {
        self.speakers_mut()
            .speakers
            .get_or_insert_with(Vec::new)
            .push(speaker);
    }

    pub fn update_speaker(&mut self, index: usize, speaker: Speaker) -> Result<(), CoreError> {
        match self
            .content
            .speakers
            .as_mut()
            .and_then(|s| s.canonical_mut().speakers.as_mut())
        {
            Some(speakers) => replace_at(speakers, "speakers", index, speaker),
            None => out_of_range("speakers", index),
        }
    }

    pub fn delete_speaker(&mut self, index: usize) -> Result<Speaker, CoreError> {
        match self
            .content
            .speakers
            .as_mut()
            .and_then(|s| s.canonical_mut().speakers.as_mut())
        {
            Some(speakers) => remove_at(speakers, "speakers", index),
            None => out_of_range("speakers", index),
        }
    }

    // -- faq --

    pub fn add_faq_item(&mut self, item: FaqItem) {
        self.faq_mut().faq.get_or_insert_with(Vec::new).push(item);
    }

    pub fn update_faq_item(&mut self, index: usize, item: FaqItem) -> Result<(), CoreError> {
        match self
            .content
            .faq
            .as_mut()
            .and_then(|f| f.canonical_mut().faq.as_mut())
        {
            Some(faq) => replace_at(faq, "faq", index, item),
            None => out_of_range("faq", index),
        }
    }

    pub fn delete_faq_item(&mut self, index: usize) -> Result<FaqItem, CoreError> {
        match self
            .content
            .faq
            .as_mut()
            .and_then(|f| f.canonical_mut().faq.as_mut())
        {
            Some(faq) => remove_at(faq, "faq", index),
            None => out_of_range("faq", index),
        }
    }

    // -- per-ticket feature bullets --

    pub fn add_ticket_feature(&mut self, ticket_type_id: DbId, feature: String) {
        self.content
            .ticket_features
            .entry(ticket_type_id)
            .or_default()
            .push(feature);
    }

    pub fn update_ticket_feature(
        &mut self,
        ticket_type_id: DbId,
        index: usize,
        feature: String,
    ) -> Result<(), CoreError> {
        match self.content.ticket_features.get_mut(&ticket_type_id) {
            Some(features) => replace_at(features, "ticketFeatures", index, feature),
            None => out_of_range("ticketFeatures", index),
        }
    }

    pub fn delete_ticket_feature(
        &mut self,
        ticket_type_id: DbId,
        index: usize,
    ) -> Result<String, CoreError> {
        match self.content.ticket_features.get_mut(&ticket_type_id) {
            Some(features) => remove_at(features, "ticketFeatures", index),
            None => out_of_range("ticketFeatures", index),
        }
    }

    /// Drop every feature bullet for a ticket type. Called when the
    /// ticket type itself is deleted so the draft does not keep orphaned
    /// entries.
    pub fn remove_ticket_features(&mut self, ticket_type_id: DbId) -> Option<Vec<String>> {
        self.content.ticket_features.remove(&ticket_type_id)
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
