//! Roster configuration.
//!
//! # Responsibility
//! - Carry the data file location and the subject set used by the Add flow.
//!
//! # Invariants
//! - The subject set is caller configuration, not a store invariant: the
//!   store accepts records with any subjects, since the mark-range and
//!   average invariants do not depend on subject names.

use serde::Deserialize;
use std::path::PathBuf;

/// Default roster document name, resolved in the working directory.
pub const DEFAULT_DATA_FILE: &str = "students_data.json";

/// Configuration for one roster instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Where the roster document lives.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Subjects a newly added student is asked marks for.
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_subjects() -> Vec<String> {
    ["Maths", "Physics", "Chemistry"]
        .iter()
        .map(|subject| subject.to_string())
        .collect()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            subjects: default_subjects(),
        }
    }
}

impl RosterConfig {
    /// Creates a config with a non-default document location.
    pub fn with_data_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }
}
