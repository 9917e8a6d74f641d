//! Schema migrations for persisted planner state.
//!
//! Migrations operate on the raw JSON document so that old spellings never
//! have to be accepted by the typed decoder.
//!
//! | version | change                                                    |
//! |---------|-----------------------------------------------------------|
//! | 0       | attributes written as shorthands (`"STR"`), no `version`  |
//! | 1       | full attribute names; skill spelled `"Marksmanship"`      |
//! | 2       | skill spelled `"Marksman"`                                |

use leveling_core::{Attribute, ErrorSeverity, LevelingError, Skill};
use serde_json::{Map, Value};

use crate::state::PlannerState;

/// Errors raised while migrating a stored document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("schema version {found} is newer than supported version {supported}")]
    FutureVersion { found: u32, supported: u32 },

    #[error("invalid schema version: {0}")]
    InvalidVersion(String),

    #[error("malformed planner state: {0}")]
    Malformed(String),
}

impl LevelingError for MigrationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FutureVersion { .. } => "MIGRATION_FUTURE_VERSION",
            Self::InvalidVersion(_) => "MIGRATION_INVALID_VERSION",
            Self::Malformed(_) => "MIGRATION_MALFORMED",
        }
    }
}

/// Skill name used before version 2.
const LEGACY_MARKSMAN: &str = "Marksmanship";

/// Schema version recorded in `document`; documents without one are version 0.
pub fn document_version(document: &Value) -> Result<u32, MigrationError> {
    match document.get("version") {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|version| u32::try_from(version).ok())
            .ok_or_else(|| MigrationError::InvalidVersion(number.to_string())),
        Some(other) => Err(MigrationError::InvalidVersion(other.to_string())),
    }
}

/// Upgrades `document` from `from_version` to the current schema.
///
/// Pure: the same input always yields the same output, and a document that is
/// already current is returned unchanged apart from its `version` field.
pub fn migrate(mut document: Value, from_version: u32) -> Result<Value, MigrationError> {
    let current = PlannerState::CURRENT_VERSION;
    if from_version > current {
        return Err(MigrationError::FutureVersion {
            found: from_version,
            supported: current,
        });
    }

    let root = document
        .as_object_mut()
        .ok_or_else(|| MigrationError::Malformed("document is not an object".into()))?;

    if from_version < 1 {
        expand_attribute_shorthands(root)?;
    }
    if from_version < 2 {
        rename_skill(root, LEGACY_MARKSMAN, Skill::Marksman.as_ref())?;
    }

    root.insert("version".into(), Value::from(current));
    Ok(document)
}

fn expand_attribute_shorthands(root: &mut Map<String, Value>) -> Result<(), MigrationError> {
    let expand = |name: &str| Attribute::from_shorthand(name).map(|attribute| attribute.to_string());

    if let Some(favored) = choices_list(root, "favored_attributes")? {
        for entry in favored.iter_mut() {
            if let Some(full) = entry.as_str().and_then(expand) {
                *entry = Value::String(full);
            }
        }
    }

    for level_up in level_ups(root)? {
        if let Some(attributes) = level_up_map(level_up, "attributes")? {
            rename_keys(attributes, expand);
        }
    }
    Ok(())
}

fn rename_skill(root: &mut Map<String, Value>, from: &str, to: &str) -> Result<(), MigrationError> {
    let rename = |name: &str| (name == from).then(|| to.to_owned());

    if let Some(majors) = choices_list(root, "major_skills")? {
        for entry in majors.iter_mut() {
            if let Some(renamed) = entry.as_str().and_then(rename) {
                *entry = Value::String(renamed);
            }
        }
    }

    for level_up in level_ups(root)? {
        if let Some(skills) = level_up_map(level_up, "skills")? {
            rename_keys(skills, rename);
        }
    }
    Ok(())
}

fn choices_list<'a>(
    root: &'a mut Map<String, Value>,
    field: &str,
) -> Result<Option<&'a mut Vec<Value>>, MigrationError> {
    let Some(choices) = root.get_mut("choices") else {
        return Ok(None);
    };
    let choices = choices
        .as_object_mut()
        .ok_or_else(|| MigrationError::Malformed("`choices` is not an object".into()))?;
    match choices.get_mut(field) {
        None => Ok(None),
        Some(Value::Array(list)) => Ok(Some(list)),
        Some(_) => Err(MigrationError::Malformed(format!(
            "`choices.{field}` is not a list"
        ))),
    }
}

fn level_ups(root: &mut Map<String, Value>) -> Result<&mut [Value], MigrationError> {
    match root.get_mut("level_ups") {
        None => Ok(&mut []),
        Some(Value::Array(list)) => Ok(list.as_mut_slice()),
        Some(_) => Err(MigrationError::Malformed("`level_ups` is not a list".into())),
    }
}

fn level_up_map<'a>(
    level_up: &'a mut Value,
    field: &str,
) -> Result<Option<&'a mut Map<String, Value>>, MigrationError> {
    let level_up = level_up
        .as_object_mut()
        .ok_or_else(|| MigrationError::Malformed("level-up is not an object".into()))?;
    match level_up.get_mut(field) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(MigrationError::Malformed(format!(
            "level-up `{field}` is not a map"
        ))),
    }
}

/// Renames every key for which `rename` returns a new name. Colliding keys
/// have their values summed.
fn rename_keys(map: &mut Map<String, Value>, rename: impl Fn(&str) -> Option<String>) {
    let renames: Vec<(String, String)> = map
        .keys()
        .filter_map(|key| rename(key).map(|new_key| (key.clone(), new_key)))
        .collect();

    for (old_key, new_key) in renames {
        let Some(value) = map.remove(&old_key) else {
            continue;
        };
        let merged = match (map.get(&new_key).and_then(Value::as_i64), value.as_i64()) {
            (Some(existing), Some(added)) => Value::from(existing + added),
            _ => value,
        };
        map.insert(new_key, merged);
    }
}
