//! Roster document persistence.
//!
//! # Responsibility
//! - Round-trip the whole roster between memory and a single JSON document.
//! - Keep file mechanics out of the store and service layers.
//!
//! # Invariants
//! - `load(save(C)) == C` for every valid collection: field values, record
//!   order and present-vs-absent mark subjects all survive.
//! - A save either replaces the destination document completely or leaves
//!   it untouched; no partial document is ever observable.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

use crate::store::roster::StoreError;

mod codec;

pub use codec::{load, save};

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error for document load/save operations.
#[derive(Debug)]
pub enum PersistError {
    /// The document exists but could not be read.
    Read(io::Error),
    /// The document (or its temporary replacement) could not be written.
    Write(io::Error),
    /// The document is not the expected JSON structure.
    Parse(serde_json::Error),
    /// The collection could not be serialized.
    Encode(serde_json::Error),
    /// The document parsed but violates a collection invariant.
    Store(StoreError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read roster document: {err}"),
            Self::Write(err) => write!(f, "failed to write roster document: {err}"),
            Self::Parse(err) => write!(f, "roster document is not valid: {err}"),
            Self::Encode(err) => write!(f, "failed to encode roster document: {err}"),
            Self::Store(err) => write!(f, "roster document violates invariants: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::Parse(err) | Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for PersistError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
