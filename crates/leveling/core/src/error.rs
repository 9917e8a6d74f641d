//! Error types for leveling-core.
//!
//! The calculation functions never fail. Errors only describe why a
//! caller-side policy check rejected an input: malformed character choices or
//! a level-up that breaks its ruleset's gate.

use crate::stats::Attribute;

/// Severity level of an error, used for categorization in callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; the user has to change something before retrying.
    Validation,

    /// Inconsistent state that indicates a bug in the caller.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all leveling errors.
pub trait LevelingError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, useful in logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Why a level-up fails its ruleset's validity gate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelUpError {
    #[error("expected {expected} major skill-ups, found {actual}")]
    MajorSkillUps { expected: i32, actual: i32 },

    #[error("expected {expected} raised attributes, found {actual}")]
    RaisedAttributes { expected: usize, actual: usize },

    #[error("spent {spent} virtues, budget is {budget}")]
    VirtueBudget { spent: i32, budget: i32 },

    #[error("spent {spent} of {budget} virtues while raised attributes can still grow")]
    UnderSpent { spent: i32, budget: i32 },

    #[error("{attribute} raised by {delta}, at most {max} allowed")]
    AttributeOverLimit {
        attribute: Attribute,
        delta: i32,
        max: i32,
    },

    #[error("{attribute} has a negative delta of {delta}")]
    NegativeDelta { attribute: Attribute, delta: i32 },
}

impl LevelingError for LevelUpError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MajorSkillUps { .. } => "LEVEL_UP_MAJOR_SKILL_UPS",
            Self::RaisedAttributes { .. } => "LEVEL_UP_RAISED_ATTRIBUTES",
            Self::VirtueBudget { .. } => "LEVEL_UP_VIRTUE_BUDGET",
            Self::UnderSpent { .. } => "LEVEL_UP_UNDER_SPENT",
            Self::AttributeOverLimit { .. } => "LEVEL_UP_ATTRIBUTE_OVER_LIMIT",
            Self::NegativeDelta { .. } => "LEVEL_UP_NEGATIVE_DELTA",
        }
    }
}

/// Malformed character-creation choices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoicesError {
    #[error("you must choose exactly {expected} favored attributes, found {actual}")]
    FavoredAttributeCount { expected: usize, actual: usize },

    #[error("favored attribute {0} chosen more than once")]
    DuplicateFavoredAttribute(Attribute),

    #[error("you must choose exactly {expected} major skills, found {actual}")]
    MajorSkillCount { expected: usize, actual: usize },

    #[error("major skill {0} chosen more than once")]
    DuplicateMajorSkill(crate::stats::Skill),
}

impl LevelingError for ChoicesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FavoredAttributeCount { .. } => "CHOICES_FAVORED_COUNT",
            Self::DuplicateFavoredAttribute(_) => "CHOICES_FAVORED_DUPLICATE",
            Self::MajorSkillCount { .. } => "CHOICES_MAJOR_COUNT",
            Self::DuplicateMajorSkill(_) => "CHOICES_MAJOR_DUPLICATE",
        }
    }
}

/// Errors raised while editing a [`LevelingPlan`](crate::plan::LevelingPlan).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("level-up for level {level} rejected: {source}")]
    Rejected {
        level: i32,
        #[source]
        source: LevelUpError,
    },

    #[error("no level-up at index {index} (plan has {len})")]
    NoSuchLevelUp { index: usize, len: usize },
}

impl LevelingError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected { .. } => ErrorSeverity::Validation,
            Self::NoSuchLevelUp { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "PLAN_REJECTED",
            Self::NoSuchLevelUp { .. } => "PLAN_NO_SUCH_LEVEL_UP",
        }
    }
}
