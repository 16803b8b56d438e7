//! Core domain logic for Rollcall.
//! This crate is the single source of truth for roster invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;
pub mod validate;

pub use config::{RosterConfig, DEFAULT_DATA_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Mark, StudentRecord};
pub use persist::{PersistError, PersistResult};
pub use service::roster_service::RosterService;
pub use store::roster::{RecordStore, StoreError, StoreResult, StudentUpdate};
pub use validate::{validate_mark, validate_name, validate_roll, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
