//! Plan repositories.
//!
//! Plans are stored by name as current-version [`PlannerState`](crate::PlannerState)
//! documents. Loading always runs the schema migration first.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePlanRepository;
pub use memory::InMemoryPlanRepository;
pub use traits::PlanRepository;
