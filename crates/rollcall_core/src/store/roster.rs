//! In-memory roster store.
//!
//! # Responsibility
//! - Hold the insertion-ordered collection of student records.
//! - Enforce roll-number uniqueness across every mutation.
//! - Provide the lookup/edit/list operations the interaction layer needs.
//!
//! # Invariants
//! - Insertion order is significant and preserved across save/load.
//! - A failed add or edit leaves the collection exactly as it was.
//! - `edit` never touches the roll number.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::student::{Mark, StudentRecord};
use crate::validate::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for roster mutations and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record field violates its invariant.
    Validation(ValidationError),
    /// Insert would break roll-number uniqueness.
    DuplicateRoll(String),
    /// No record carries the requested roll number.
    NotFound(String),
    /// Index-addressed operation hit a position outside the collection.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateRoll(roll) => write!(f, "roll number already exists: `{roll}`"),
            Self::NotFound(roll) => write!(f, "no student found with roll number `{roll}`"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for {len} records")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateRoll(_) | Self::NotFound(_) | Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Per-field change set for the edit operation.
///
/// `None`/empty means "leave this field untouched"; a roll-number change
/// cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    /// Replacement name, already validated by the caller.
    pub name: Option<String>,
    /// Subject marks to overwrite or insert; other subjects are untouched.
    pub marks: Vec<(String, Mark)>,
}

impl StudentUpdate {
    /// Returns whether this update changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.marks.is_empty()
    }
}

/// Owned, insertion-ordered collection of student records.
///
/// Always constructed explicitly so tests and callers hold isolated
/// instances; there is no ambient/global roster state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a deserialized collection.
    ///
    /// # Contract
    /// - Every record must pass `StudentRecord::validate()`.
    /// - Roll numbers must be unique across the whole collection.
    ///
    /// Used by the persistence read path so a tampered document cannot
    /// smuggle an invariant violation into memory.
    pub fn from_records(records: Vec<StudentRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Appends a record to the end of the collection.
    ///
    /// Callers are expected to have validated the roll against
    /// [`RecordStore::roll_set`] already; the store re-checks uniqueness
    /// anyway and fails `DuplicateRoll` itself.
    pub fn add(&mut self, record: StudentRecord) -> StoreResult<()> {
        record.validate()?;
        if self.find_by_roll(&record.roll).is_some() {
            return Err(StoreError::DuplicateRoll(record.roll));
        }
        self.records.push(record);
        Ok(())
    }

    /// Returns the position of the record with the given roll number.
    ///
    /// Exact string equality; uniqueness guarantees the first match is the
    /// only match.
    pub fn find_by_roll(&self, roll: &str) -> Option<usize> {
        self.records.iter().position(|record| record.roll == roll)
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    /// Applies a partial update to the record at `index`.
    ///
    /// # Contract
    /// - Fields absent from `update` are left unchanged.
    /// - The roll number is never modified.
    /// - The updated record is validated before the mutation commits; on
    ///   failure the stored record is unchanged.
    pub fn edit(&mut self, index: usize, update: &StudentUpdate) -> StoreResult<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        let mut updated = record.clone();
        if let Some(name) = &update.name {
            updated.name = name.clone();
        }
        for (subject, mark) in &update.marks {
            updated.marks.insert(subject.clone(), *mark);
        }
        updated.validate()?;

        *record = updated;
        Ok(())
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Roll numbers currently in use; the duplicate-check context for
    /// [`crate::validate::validate_roll`].
    pub fn roll_set(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|record| record.roll.clone())
            .collect()
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
