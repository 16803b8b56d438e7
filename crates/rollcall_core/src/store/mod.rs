//! Record store layer.
//!
//! # Responsibility
//! - Own the ordered student collection and its collection-wide invariants.
//! - Return semantic errors (`DuplicateRoll`, `NotFound`) in addition to
//!   validation errors.
//!
//! # Invariants
//! - Mutations must re-run `StudentRecord::validate()` before committing.
//! - No two records ever share a roll number.

pub mod roster;
