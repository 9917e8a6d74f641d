//! In-memory PlanRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::state::PlannerState;

use super::error::check_name;
use super::{PlanRepository, RepositoryError, Result};

/// Keeps plans in a map; nothing survives the process.
pub struct InMemoryPlanRepository {
    plans: RwLock<HashMap<String, PlannerState>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPlanRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn save(&self, name: &str, state: &PlannerState) -> Result<()> {
        check_name(name)?;
        let mut plans = self
            .plans
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        plans.insert(name.to_owned(), state.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<PlannerState>> {
        check_name(name)?;
        let plans = self
            .plans
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(plans.get(name).cloned())
    }

    fn exists(&self, name: &str) -> bool {
        check_name(name).is_ok()
            && self
                .plans
                .read()
                .map(|plans| plans.contains_key(name))
                .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        check_name(name)?;
        let mut plans = self
            .plans
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        plans.remove(name);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let plans = self
            .plans
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = plans.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}
