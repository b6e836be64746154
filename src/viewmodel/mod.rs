//! Roster view-model.
//!
//! This module provides [`RosterViewModel`], the state container driven by
//! the presentation layer:
//! - holds the record list, form input buffers, search text, and the edit
//!   selection
//! - derives the filtered view on demand
//! - orchestrates store calls, reloading the full list after every mutation
//!
//! The remote store is the single source of truth. The in-memory list is a
//! disposable cache, fully replaced on reload; there is no incremental or
//! optimistic update and no merge logic.

use crate::error::StoreError;
use crate::store::UserRecord;
use crate::traits::RecordStore;

/// View-model for the user roster.
///
/// All mutations go through the operations below; reads go through the
/// accessors. Store failures are returned to the caller so the presentation
/// layer can react (retry, toast, etc.) instead of being silently dropped.
///
/// Operations that reject invalid form input return `Ok(false)` and leave
/// every piece of state untouched, making the "nothing happened" path
/// observable without being an error.
#[derive(Debug)]
pub struct RosterViewModel<S> {
    store: S,
    records: Vec<UserRecord>,
    /// Name entry buffer, written by the presentation layer.
    pub name_input: String,
    /// Age entry buffer, written by the presentation layer.
    pub age_input: String,
    /// Active search text, written by the presentation layer.
    pub search_text: String,
    selected: Option<UserRecord>,
    editing: bool,
}

impl<S: RecordStore> RosterViewModel<S> {
    /// Create an empty view-model backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            name_input: String::new(),
            age_input: String::new(),
            search_text: String::new(),
            selected: None,
            editing: false,
        }
    }

    /// The full record list, sorted ascending by name.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// The record currently selected for editing, if any.
    #[must_use]
    pub const fn selected_record(&self) -> Option<&UserRecord> {
        self.selected.as_ref()
    }

    /// Whether the edit flow is active.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// The records matching the active search text, in list order.
    ///
    /// Pure function of the record list and the search text, recomputed on
    /// every call. An empty search returns the full list; otherwise the
    /// order-preserving subsequence whose names contain the search text as a
    /// case-insensitive substring.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<UserRecord> {
        if self.search_text.is_empty() {
            return self.records.clone();
        }

        let needle = self.search_text.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Replace the record list with a fresh snapshot from the store.
    ///
    /// The snapshot is sorted ascending by name, case-insensitively. On
    /// failure the previous list is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot read fails.
    pub async fn fetch_all(&mut self) -> Result<(), StoreError> {
        let mut fresh = self.store.fetch_all().await?;
        fresh.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        self.records = fresh;
        Ok(())
    }

    /// Create a record from the entry buffers.
    ///
    /// Returns `Ok(false)` without any remote call when `age_input` does not
    /// parse as an integer or `name_input` is empty. On success a fresh id is
    /// generated, the record is written, the entry buffers and search text
    /// are cleared, and the list is reloaded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write or the reload fails; the entry
    /// buffers are left untouched when the write fails.
    pub async fn save(&mut self) -> Result<bool, StoreError> {
        let Ok(age) = self.age_input.parse::<i64>() else {
            tracing::debug!(input = %self.age_input, "Rejecting save: age is not an integer");
            return Ok(false);
        };
        if self.name_input.is_empty() {
            tracing::debug!("Rejecting save: name is empty");
            return Ok(false);
        }

        let record = UserRecord::new(self.name_input.clone(), age);
        tracing::info!(id = %record.id, "Creating record");
        self.store.create(&record).await?;

        self.name_input.clear();
        self.age_input.clear();
        self.search_text.clear();
        self.fetch_all().await?;
        Ok(true)
    }

    /// Apply new field values to the selected record.
    ///
    /// Returns `Ok(false)` without any remote call when no record is
    /// selected, `new_age_text` does not parse as an integer, or `new_name`
    /// is empty. On success the store is patched, the list reloaded, and the
    /// edit flow ends with the selection cleared.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the patch or the reload fails; the edit flow
    /// stays active when the patch fails.
    pub async fn update_record(
        &mut self,
        new_name: &str,
        new_age_text: &str,
    ) -> Result<bool, StoreError> {
        let Some(selected) = self.selected.clone() else {
            tracing::debug!("Rejecting update: no record selected");
            return Ok(false);
        };
        let Ok(age) = new_age_text.parse::<i64>() else {
            tracing::debug!(input = %new_age_text, "Rejecting update: age is not an integer");
            return Ok(false);
        };
        if new_name.is_empty() {
            tracing::debug!("Rejecting update: name is empty");
            return Ok(false);
        }

        tracing::info!(id = %selected.id, "Updating record");
        self.store.update(&selected.id, new_name, age).await?;

        self.fetch_all().await?;
        self.selected = None;
        self.editing = false;
        Ok(true)
    }

    /// Delete the records at the given indices into the *filtered* list.
    ///
    /// Each index is translated to its record id through the currently
    /// filtered view, then resolved against the canonical list by id. A
    /// filtered position does not correspond to the same position in the
    /// unfiltered list, so deletion never operates on raw positions.
    ///
    /// Each successful removal triggers its own full reload. Out-of-range
    /// indices are skipped. Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on the first failing removal or reload;
    /// removals already performed stay applied.
    pub async fn delete_records(&mut self, filtered_indices: &[usize]) -> Result<usize, StoreError> {
        let filtered = self.filtered_records();
        let ids: Vec<String> = filtered_indices
            .iter()
            .filter_map(|&index| filtered.get(index).map(|record| record.id.clone()))
            .collect();

        let mut removed = 0;
        for id in ids {
            // Resolve against the canonical list by identity, never position
            if !self.records.iter().any(|record| record.id == id) {
                continue;
            }

            tracing::info!(id = %id, "Deleting record");
            self.store.remove(&id).await?;
            removed += 1;
            self.fetch_all().await?;
        }

        Ok(removed)
    }

    /// Select the record with the given id and enter the edit flow.
    ///
    /// Returns `false` when no record with that id exists. The presentation
    /// layer populates its edit buffers from [`Self::selected_record`].
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.records.iter().find(|record| record.id == id) {
            Some(record) => {
                self.selected = Some(record.clone());
                self.editing = true;
                true
            }
            None => false,
        }
    }

    /// Leave the edit flow without mutating anything.
    pub fn cancel_edit(&mut self) {
        self.selected = None;
        self.editing = false;
    }
}
