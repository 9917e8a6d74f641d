//! File-based PlanRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::state::PlannerState;

use super::error::check_name;
use super::{PlanRepository, RepositoryError, Result};

/// Stores each plan as `{name}.json` under a base directory.
///
/// JSON keeps saved plans readable and lets old documents be migrated before
/// they are decoded.
pub struct FilePlanRepository {
    base_dir: PathBuf,
}

impl FilePlanRepository {
    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn plan_path(&self, name: &str) -> Result<PathBuf> {
        check_name(name)?;
        Ok(self.base_dir.join(format!("{name}.json")))
    }
}

impl PlanRepository for FilePlanRepository {
    fn save(&self, name: &str, state: &PlannerState) -> Result<()> {
        let path = self.plan_path(name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        fs::write(&temp_path, json)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved plan '{}' to {}", name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<PlannerState>> {
        let path = self.plan_path(name)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let document: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;
        let state = PlannerState::from_json_value(document)?;

        tracing::debug!("Loaded plan '{}' from {}", name, path.display());

        Ok(Some(state))
    }

    fn exists(&self, name: &str) -> bool {
        self.plan_path(name).map(|path| path.exists()).unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.plan_path(name)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted plan '{}'", name);
        }

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(".json")
                && check_name(name).is_ok()
            {
                names.push(name.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
