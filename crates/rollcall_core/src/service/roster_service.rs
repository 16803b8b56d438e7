//! Roster use-case service.
//!
//! # Responsibility
//! - Own one roster (store + config) for the lifetime of a session.
//! - Apply the startup and shutdown persistence policies.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - A failed load degrades to an empty roster; the process keeps running.
//! - A failed save leaves the in-memory roster intact and retryable.

use log::warn;
use std::collections::BTreeSet;

use crate::config::RosterConfig;
use crate::model::student::StudentRecord;
use crate::persist;
use crate::persist::PersistResult;
use crate::store::roster::{RecordStore, StoreError, StoreResult, StudentUpdate};

/// Session-level wrapper around one roster.
pub struct RosterService {
    config: RosterConfig,
    store: RecordStore,
}

impl RosterService {
    /// Opens a roster session, loading the persisted document.
    ///
    /// # Contract
    /// - A missing document starts an empty roster (first run).
    /// - An unreadable or invalid document also starts an empty roster;
    ///   the failure is surfaced through the log, never as a crash.
    pub fn open(config: RosterConfig) -> Self {
        let store = match persist::load(&config.data_path) {
            Ok(store) => store,
            Err(err) => {
                warn!(
                    "event=data_load module=service status=fallback_empty path={} error={}",
                    config.data_path.display(),
                    err
                );
                RecordStore::new()
            }
        };
        Self { config, store }
    }

    /// Creates a session around an existing store, skipping the load.
    ///
    /// Used by tests and callers that assemble the collection themselves.
    pub fn with_store(config: RosterConfig, store: RecordStore) -> Self {
        Self { config, store }
    }

    /// Saves the full roster to the configured document path.
    ///
    /// On failure the in-memory roster is untouched and the save can be
    /// retried.
    pub fn save(&self) -> PersistResult<()> {
        persist::save(&self.store, &self.config.data_path)
    }

    /// Adds a validated record to the roster.
    pub fn add(&mut self, record: StudentRecord) -> StoreResult<()> {
        self.store.add(record)
    }

    /// Looks up a record by roll number.
    pub fn find_by_roll(&self, roll: &str) -> Option<(usize, &StudentRecord)> {
        let index = self.store.find_by_roll(roll)?;
        self.store.get(index).map(|record| (index, record))
    }

    /// Applies a partial update to the record with the given roll number.
    ///
    /// Maps a missing roll to `StoreError::NotFound`.
    pub fn edit_by_roll(&mut self, roll: &str, update: &StudentUpdate) -> StoreResult<()> {
        let index = self
            .store
            .find_by_roll(roll)
            .ok_or_else(|| StoreError::NotFound(roll.to_string()))?;
        self.store.edit(index, update)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[StudentRecord] {
        self.store.records()
    }

    /// Roll numbers currently in use.
    pub fn roll_set(&self) -> BTreeSet<String> {
        self.store.roll_set()
    }

    /// Subjects a newly added student is asked marks for.
    pub fn subjects(&self) -> &[String] {
        &self.config.subjects
    }
}
