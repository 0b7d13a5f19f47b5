//! Error types for graph validation and unlock transactions.
//!
//! Two enums cover the two failure domains: `ValidationError` for
//! configuration-load problems (fatal, the graph must never be served in an
//! invalid state) and `UnlockError` for per-unlock failures (recoverable,
//! returned to the caller with enough detail to explain the refusal).

use crate::skill::Prerequisite;
use crate::skill_id::SkillId;
use thiserror::Error;

/// Format a cycle path as a readable string.
fn format_cycle_path(path: &[SkillId]) -> String {
    if path.is_empty() {
        return String::from("(empty cycle)");
    }
    path.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Errors raised while loading and validating a skill graph.
///
/// All of these are fatal at startup/config-load time: a graph that fails
/// validation must not be used to serve unlock decisions.
///
/// # Examples
///
/// ```rust
/// use startree::{SkillId, ValidationError};
///
/// let err = ValidationError::DuplicateId(SkillId::from_str("core"));
/// assert!(err.to_string().contains("core"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Two skill definitions share the same id.
    #[error("Duplicate skill id: {0}")]
    DuplicateId(SkillId),

    /// A skill prerequisite references an id that is not in the graph.
    #[error("Skill {skill} requires unknown skill {missing}")]
    DanglingPrerequisite {
        /// The skill whose prerequisite list is broken.
        skill: SkillId,
        /// The referenced id that does not exist.
        missing: SkillId,
    },

    /// A prerequisite cycle was detected.
    ///
    /// Contains the path of skills involved in the cycle. If A requires B,
    /// B requires C, and C requires A, the path is `[A, B, C, A]`.
    #[error("Prerequisite cycle detected: {}", format_cycle_path(.path))]
    Cycle {
        /// The offending cycle, first id repeated at the end.
        path: Vec<SkillId>,
    },

    /// A legacy string-encoded rule could not be parsed.
    #[error("Malformed legacy rule: {0:?}")]
    MalformedRule(String),

    /// The configuration document itself could not be decoded.
    #[error("Invalid skill configuration: {0}")]
    Config(String),
}

/// Errors raised by [`attempt_unlock`](crate::attempt_unlock).
///
/// None of these are fatal; they are expected outcomes in normal use and
/// carry enough structure for the presentation layer to explain why the
/// unlock was refused.
///
/// # Examples
///
/// ```rust
/// use startree::{SkillId, UnlockError};
///
/// let err = UnlockError::UnknownSkill(SkillId::from_str("warp-drive"));
/// assert!(err.to_string().contains("warp-drive"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UnlockError {
    /// The requested skill id does not exist in the current graph.
    #[error("Unknown skill: {0}")]
    UnknownSkill(SkillId),

    /// The skill is already unlocked.
    ///
    /// A benign no-op signal: retrying an unlock never double-charges.
    #[error("Skill already unlocked: {0}")]
    AlreadyUnlocked(SkillId),

    /// Prerequisites or cost are unmet.
    ///
    /// `blocked_by` lists every unmet prerequisite. A pure cost shortfall
    /// yields this error with an empty `blocked_by` list; cost is reported
    /// separately from prerequisites so the UI can distinguish "can't
    /// afford" from "requirements not met".
    #[error("Skill not eligible to unlock ({} unmet prerequisites)", .blocked_by.len())]
    Ineligible {
        /// Every unmet prerequisite, in definition order.
        blocked_by: Vec<Prerequisite>,
    },

    /// The persistence layer rejected the commit due to a concurrent
    /// update.
    ///
    /// This core never produces `Conflict` itself; the variant exists so
    /// persistence adapters can surface optimistic-concurrency failures
    /// through the same error type. Callers should reload the snapshot and
    /// retry.
    #[error("Snapshot changed concurrently, reload and retry")]
    Conflict,
}
