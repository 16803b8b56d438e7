//! Raw input validation.
//!
//! # Responsibility
//! - Convert untrusted prompt text into typed, constraint-satisfying values.
//! - Report the failure reason without retrying (re-prompting is the
//!   caller's concern).
//!
//! # Invariants
//! - Validators are pure: a string plus minimal context in, a value or a
//!   typed error out. No storage knowledge, no I/O.
//! - Roll numbers pass through unnormalized; leading zeros and non-numeric
//!   roll formats are preserved exactly.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::student::Mark;

/// Inclusive mark bounds shared by input validation and record validation.
pub const MARK_MIN: i64 = 0;
/// Upper inclusive mark bound.
pub const MARK_MAX: i64 = 100;

// Unicode letters with interior spaces; trimming upstream guarantees the
// match can never be all-spaces.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic} ]+$").expect("valid name regex"));

/// Validation error for a single raw input or a constructed record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is empty after trimming.
    EmptyInput,
    /// Name contains characters other than letters and spaces.
    NonAlphabetic(String),
    /// Roll number is already taken by another record.
    DuplicateRoll(String),
    /// Mark input is not a base-10 integer.
    NotAnInteger(String),
    /// Mark input parses but falls outside the inclusive [0,100] range.
    OutOfRange(i64),
    /// A stored mark violates the range invariant; names its subject.
    MarkOutOfRange { subject: String, value: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input cannot be empty"),
            Self::NonAlphabetic(value) => {
                write!(f, "name must contain only letters and spaces: `{value}`")
            }
            Self::DuplicateRoll(value) => {
                write!(f, "roll number already exists: `{value}`")
            }
            Self::NotAnInteger(value) => {
                write!(f, "marks must be a whole number: `{value}`")
            }
            Self::OutOfRange(value) => {
                write!(f, "marks must be between {MARK_MIN} and {MARK_MAX}, got {value}")
            }
            Self::MarkOutOfRange { subject, value } => {
                write!(
                    f,
                    "mark for `{subject}` must be between {MARK_MIN} and {MARK_MAX}, got {value}"
                )
            }
        }
    }
}

impl Error for ValidationError {}

/// Validates a student name.
///
/// # Contract
/// - Trims leading/trailing whitespace.
/// - `EmptyInput` when nothing remains after trimming.
/// - `NonAlphabetic` when any non-space character is not a letter.
/// - Returns the trimmed name otherwise.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(ValidationError::NonAlphabetic(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validates a roll number against the set of rolls already in use.
///
/// # Contract
/// - Trims leading/trailing whitespace; no other normalization.
/// - `EmptyInput` when nothing remains after trimming.
/// - `DuplicateRoll` when the trimmed value is present in `existing`.
/// - Returns the trimmed roll otherwise, case and format preserved.
pub fn validate_roll(raw: &str, existing: &BTreeSet<String>) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if existing.contains(trimmed) {
        return Err(ValidationError::DuplicateRoll(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validates a single subject mark.
///
/// # Contract
/// - Trims leading/trailing whitespace.
/// - `EmptyInput` when nothing remains after trimming.
/// - `NotAnInteger` when the input is not a base-10 integer.
/// - `OutOfRange` when the value is outside [0,100].
pub fn validate_mark(raw: &str) -> Result<Mark, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotAnInteger(trimmed.to_string()))?;
    if !(MARK_MIN..=MARK_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange(value));
    }
    Ok(value as Mark)
}

#[cfg(test)]
mod tests {
    use super::{validate_mark, validate_name, validate_roll, ValidationError};
    use std::collections::BTreeSet;

    #[test]
    fn name_accepts_letters_and_interior_spaces() {
        assert_eq!(
            validate_name("  Jane Doe  ").expect("plain name should pass"),
            "Jane Doe"
        );
    }

    #[test]
    fn name_accepts_non_ascii_letters() {
        assert_eq!(
            validate_name("Zoë Müller").expect("unicode letters should pass"),
            "Zoë Müller"
        );
    }

    #[test]
    fn name_rejects_digits_and_blank_input() {
        assert_eq!(
            validate_name("J4ne"),
            Err(ValidationError::NonAlphabetic("J4ne".to_string()))
        );
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn roll_preserves_format_and_rejects_duplicates() {
        let existing: BTreeSet<String> = ["007".to_string()].into_iter().collect();

        assert_eq!(
            validate_roll(" 0042-B ", &existing).expect("unused roll should pass"),
            "0042-B"
        );
        assert_eq!(
            validate_roll("007", &existing),
            Err(ValidationError::DuplicateRoll("007".to_string()))
        );
        assert_eq!(validate_roll("", &existing), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn mark_bounds_are_inclusive() {
        assert_eq!(validate_mark("0").expect("lower bound"), 0);
        assert_eq!(validate_mark("100").expect("upper bound"), 100);
        assert_eq!(validate_mark("101"), Err(ValidationError::OutOfRange(101)));
        assert_eq!(validate_mark("-1"), Err(ValidationError::OutOfRange(-1)));
    }

    #[test]
    fn mark_rejects_non_integer_input() {
        assert_eq!(
            validate_mark("abc"),
            Err(ValidationError::NotAnInteger("abc".to_string()))
        );
        assert_eq!(validate_mark(" "), Err(ValidationError::EmptyInput));
    }
}
