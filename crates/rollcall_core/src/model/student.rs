//! Student record model.
//!
//! # Responsibility
//! - Define the canonical student record and its derived values.
//! - Re-check record invariants for write paths and the persistence codec.
//!
//! # Invariants
//! - `roll` is the immutable identity key; edits replace name/marks only.
//! - Wire field names (`Name`, `Roll_Number`, `Marks`) are fixed by the
//!   persisted-document contract and must not drift.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validate::{validate_name, ValidationError, MARK_MAX, MARK_MIN};

/// Integer score for one subject, constrained to [0,100].
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Mark = u8;

/// Canonical roster record for one student.
///
/// The serialized shape is exactly the persisted-document contract: a record
/// with unknown or missing fields does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRecord {
    /// Display name; letters and interior spaces only.
    #[serde(rename = "Name")]
    pub name: String,
    /// Unique identity key; opaque string, never coerced to a number.
    #[serde(rename = "Roll_Number")]
    pub roll: String,
    /// Subject name to score. Which subjects exist is caller configuration,
    /// not a record invariant.
    #[serde(rename = "Marks")]
    pub marks: BTreeMap<String, Mark>,
}

impl StudentRecord {
    /// Creates a record from already-validated parts.
    pub fn new(
        name: impl Into<String>,
        roll: impl Into<String>,
        marks: BTreeMap<String, Mark>,
    ) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            marks,
        }
    }

    /// Arithmetic mean of all marks, or `0.0` for an empty marks map.
    pub fn average(&self) -> f64 {
        if self.marks.is_empty() {
            return 0.0;
        }
        let total: u32 = self.marks.values().map(|&mark| u32::from(mark)).sum();
        f64::from(total) / self.marks.len() as f64
    }

    /// Re-checks the field invariants on an already-constructed record.
    ///
    /// # Contract
    /// - Name must be non-empty and alphabetic-with-spaces.
    /// - Roll must be non-empty after trimming.
    /// - Every mark must lie in [0,100].
    ///
    /// Write paths call this before committing a mutation; the persistence
    /// codec calls it so an invalid document is rejected instead of masked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if self.roll.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        for (subject, &mark) in &self.marks {
            let value = i64::from(mark);
            if !(MARK_MIN..=MARK_MAX).contains(&value) {
                return Err(ValidationError::MarkOutOfRange {
                    subject: subject.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StudentRecord;
    use crate::validate::ValidationError;
    use std::collections::BTreeMap;

    fn marks(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
        entries
            .iter()
            .map(|(subject, mark)| (subject.to_string(), *mark))
            .collect()
    }

    #[test]
    fn average_is_mean_of_marks() {
        let record = StudentRecord::new(
            "Asha Rao",
            "21",
            marks(&[("Maths", 80), ("Physics", 90), ("Chemistry", 70)]),
        );
        assert_eq!(record.average(), 80.0);
    }

    #[test]
    fn average_of_no_marks_is_zero() {
        let record = StudentRecord::new("Asha Rao", "21", BTreeMap::new());
        assert_eq!(record.average(), 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_mark() {
        let record = StudentRecord::new("Asha Rao", "21", marks(&[("Maths", 150)]));
        assert_eq!(
            record.validate(),
            Err(ValidationError::MarkOutOfRange {
                subject: "Maths".to_string(),
                value: 150,
            })
        );
    }

    #[test]
    fn validate_rejects_blank_roll() {
        let record = StudentRecord::new("Asha Rao", "  ", BTreeMap::new());
        assert_eq!(record.validate(), Err(ValidationError::EmptyInput));
    }
}
