//! Persisted planner state, schema migrations and data-file loaders.
//!
//! This crate sits between storage and `leveling-core`:
//! - Versioned planner state (choices, ruleset, level-ups, abilities)
//! - Schema migration applied once when a document is loaded
//! - Plan repositories (JSON files, in-memory)
//! - Rules configuration and hand-written plans (TOML/JSON)
//!
//! The engine never sees a stale document: everything is migrated to
//! [`PlannerState::CURRENT_VERSION`] before it is decoded.

pub mod migrate;
pub mod repository;
pub mod state;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use migrate::{MigrationError, document_version, migrate};
pub use repository::{
    FilePlanRepository, InMemoryPlanRepository, PlanRepository, RepositoryError,
};
pub use state::PlannerState;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, PlanLoader};
