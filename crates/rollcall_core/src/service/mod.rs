//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and persistence calls into use-case level APIs.
//! - Keep the interaction layer decoupled from storage details.

pub mod roster_service;
