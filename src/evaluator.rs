//! Unlock eligibility evaluation.
//!
//! Pure functions that decide whether a skill is currently eligible to
//! unlock against a [`ProgressSnapshot`]. No side effects, no I/O, no
//! exceptions: missing data always resolves to "not satisfied", and
//! identical inputs always yield identical decisions.

use crate::skill::{Prerequisite, Skill};
use crate::snapshot::ProgressSnapshot;
use serde::{Deserialize, Serialize};

/// The outcome of evaluating a skill against a snapshot.
///
/// `blocked_by` is prerequisite-shaped only: a cost shortfall makes
/// `eligible` false but is never listed, so the UI can render "can't
/// afford" separately from "requirements not met".
///
/// An already-unlocked skill is never "eligible to unlock" again; that case
/// yields `eligible: false` with an empty `blocked_by`. Callers that need
/// to distinguish it check [`ProgressSnapshot::is_unlocked`] or use
/// [`status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockDecision {
    /// Whether the skill can be unlocked right now.
    pub eligible: bool,
    /// Every unmet prerequisite, in definition order. Empty iff all
    /// prerequisites are satisfied.
    pub blocked_by: Vec<Prerequisite>,
}

/// Whether a single prerequisite is satisfied by a snapshot.
///
/// A `Skill` prerequisite is satisfied iff its id is in the unlocked set,
/// even when that id no longer exists in the current graph (forward
/// compatibility over strictness). A `Progress` prerequisite is satisfied
/// iff the counter meets the threshold, with missing counters reading 0.
fn is_satisfied(prerequisite: &Prerequisite, snapshot: &ProgressSnapshot) -> bool {
    match prerequisite {
        Prerequisite::Skill { skill_id } => snapshot.is_unlocked(skill_id),
        Prerequisite::Progress {
            classification_type,
            min_count,
        } => snapshot.classification_count(classification_type) >= *min_count,
    }
}

/// Evaluate whether a skill is eligible to unlock.
///
/// Eligible iff the skill is not yet unlocked, every prerequisite is
/// satisfied, and the stardust balance covers the cost.
///
/// # Examples
///
/// ```rust
/// use startree::{evaluate, Category, Prerequisite, ProgressSnapshot, Skill};
///
/// let scan = Skill::new("scan", "Deep Scan", Category::Core, 10)
///     .with_prerequisite(Prerequisite::skill("core"));
///
/// let mut snapshot = ProgressSnapshot::new();
/// snapshot.grant_stardust(10);
///
/// // Prerequisite unmet: reported in blocked_by.
/// let decision = evaluate(&scan, &snapshot);
/// assert!(!decision.eligible);
/// assert_eq!(decision.blocked_by, vec![Prerequisite::skill("core")]);
/// ```
pub fn evaluate(skill: &Skill, snapshot: &ProgressSnapshot) -> UnlockDecision {
    if snapshot.is_unlocked(&skill.id) {
        return UnlockDecision {
            eligible: false,
            blocked_by: Vec::new(),
        };
    }

    let blocked_by: Vec<Prerequisite> = skill
        .prerequisites
        .iter()
        .filter(|prerequisite| !is_satisfied(prerequisite, snapshot))
        .cloned()
        .collect();

    UnlockDecision {
        eligible: blocked_by.is_empty() && snapshot.balance() >= skill.cost,
        blocked_by,
    }
}

/// Display status of a skill for one user.
///
/// Only `Unlocked` is persisted state; `Locked` and `Available` are
/// computed from the snapshot on every call. There is no downgrade path
/// out of `Unlocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    /// Prerequisites or cost unmet.
    Locked,
    /// Eligible to unlock right now.
    Available,
    /// Already unlocked.
    Unlocked,
}

/// Derive the display status of a skill.
///
/// # Examples
///
/// ```rust
/// use startree::{status, Category, ProgressSnapshot, Skill, SkillStatus};
///
/// let core = Skill::new("core", "Core Research", Category::Core, 0);
/// let snapshot = ProgressSnapshot::new();
///
/// assert_eq!(status(&core, &snapshot), SkillStatus::Available);
/// ```
pub fn status(skill: &Skill, snapshot: &ProgressSnapshot) -> SkillStatus {
    if snapshot.is_unlocked(&skill.id) {
        SkillStatus::Unlocked
    } else if evaluate(skill, snapshot).eligible {
        SkillStatus::Available
    } else {
        SkillStatus::Locked
    }
}
