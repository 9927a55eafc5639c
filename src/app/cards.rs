//! Per-job card state store.
//!
//! [`CardStore`] is a keyed map from [`JobId`] to [`CardState`]. Entries are only
//! created by [`CardStore::ensure`]; every other operation on an id that was
//! never ensured (or has since been pruned) fails with
//! [`JobBoardError::UnknownCard`] and changes nothing.

use crate::app::modes::{ApplicantField, Submission};
use crate::domain::error::{JobBoardError, Result};
use crate::domain::{ApplyPayload, JobId};
use std::collections::{HashMap, HashSet};

/// Interaction state of one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    pub panel_open: bool,
    pub submission: Submission,
    pub applicant_name: String,
    pub applicant_contact: String,
    pub applicant_message: String,
    /// Number of sends issued from this card; identifies the latest one.
    pub attempt: u64,
}

impl CardState {
    /// Trimmed application body built from the panel's fields.
    #[must_use]
    pub fn application(&self) -> ApplyPayload {
        ApplyPayload::new(&self.applicant_name, &self.applicant_contact, &self.applicant_message)
    }
}

/// Card states keyed by job id.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: HashMap<JobId, CardState>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default (closed, idle) entry for `id` if none exists.
    pub fn ensure(&mut self, id: &JobId) {
        self.cards.entry(id.clone()).or_default();
    }

    /// Flips panel visibility. Submission status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::UnknownCard`] if `id` has no entry.
    pub fn toggle_panel(&mut self, id: &JobId) -> Result<bool> {
        let card = self.card_mut(id)?;
        card.panel_open = !card.panel_open;
        Ok(card.panel_open)
    }

    /// # Errors
    ///
    /// Returns [`JobBoardError::UnknownCard`] if `id` has no entry.
    pub fn set_submission(&mut self, id: &JobId, status: Submission) -> Result<()> {
        self.card_mut(id)?.submission = status;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`JobBoardError::UnknownCard`] if `id` has no entry.
    pub fn set_field(&mut self, id: &JobId, field: ApplicantField, value: String) -> Result<()> {
        let card = self.card_mut(id)?;
        let slot = match field {
            ApplicantField::Name => &mut card.applicant_name,
            ApplicantField::Contact => &mut card.applicant_contact,
            ApplicantField::Message => &mut card.applicant_message,
        };
        *slot = value;
        Ok(())
    }

    /// Starts a new send attempt: status becomes `Sending` and the attempt
    /// counter advances. Returns the new attempt number.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::UnknownCard`] if `id` has no entry.
    pub fn begin_send(&mut self, id: &JobId) -> Result<u64> {
        let card = self.card_mut(id)?;
        card.submission = Submission::Sending;
        card.attempt += 1;
        Ok(card.attempt)
    }

    /// Removes every entry whose id is not in `valid_ids`. Returns how many
    /// entries were dropped.
    pub fn prune(&mut self, valid_ids: &HashSet<&JobId>) -> usize {
        let before = self.cards.len();
        self.cards.retain(|id, _| valid_ids.contains(id));
        before - self.cards.len()
    }

    #[must_use]
    pub fn get(&self, id: &JobId) -> Option<&CardState> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &JobId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &JobId> {
        self.cards.keys()
    }

    fn card_mut(&mut self, id: &JobId) -> Result<&mut CardState> {
        self.cards
            .get_mut(id)
            .ok_or_else(|| JobBoardError::UnknownCard(id.clone()))
    }
}
