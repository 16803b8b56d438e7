//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store, the persistence
//!   codec and the interaction layer.
//!
//! # Invariants
//! - Every record is identified by its roll number; the roll is never
//!   reassigned once the record exists.
//! - Every stored mark lies in the inclusive [0,100] range.

pub mod student;
