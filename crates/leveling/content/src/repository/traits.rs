//! Repository contract for saving and loading planner state.

use crate::state::PlannerState;

use super::{RepositoryError, Result};

/// Named storage for planner state.
pub trait PlanRepository: Send + Sync {
    /// Save `state` under `name`, replacing any previous plan.
    fn save(&self, name: &str, state: &PlannerState) -> Result<()>;

    /// Load the plan stored under `name`, migrated to the current schema.
    fn load(&self, name: &str) -> Result<Option<PlannerState>>;

    /// Check if a plan exists
    fn exists(&self, name: &str) -> bool;

    /// Delete a plan; deleting a missing plan is not an error.
    fn delete(&self, name: &str) -> Result<()>;

    /// Names of all stored plans, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Like [`load`](Self::load), but a missing plan is an error.
    fn load_required(&self, name: &str) -> Result<PlannerState> {
        self.load(name)?
            .ok_or_else(|| RepositoryError::NotFound(name.to_owned()))
    }
}
