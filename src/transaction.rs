//! Unlock transaction module.
//!
//! The side-effect-free "spend and record" step: given an eligible skill
//! and sufficient balance, produce the post-unlock snapshot, or a typed
//! failure explaining the refusal. Durable persistence is the caller's
//! job; the deduction and the unlock record must commit together or not
//! at all (see [`UnlockError::Conflict`] for the racing-commit case).

use crate::error::UnlockError;
use crate::evaluator::evaluate;
use crate::graph::SkillGraph;
use crate::skill_id::SkillId;
use crate::snapshot::ProgressSnapshot;

/// Attempt to unlock a skill, all-or-nothing.
///
/// On success returns a new [`ProgressSnapshot`] with the skill recorded
/// and its cost deducted; the input snapshot is never modified. Failure
/// cases, in check order:
///
/// - [`UnlockError::UnknownSkill`]: id not in the graph.
/// - [`UnlockError::AlreadyUnlocked`]: benign idempotence signal; a retry
///   against the post-unlock snapshot never double-charges.
/// - [`UnlockError::Ineligible`]: prerequisites or cost unmet, with every
///   unmet prerequisite listed.
///
/// # Examples
///
/// ```rust
/// use startree::{attempt_unlock, Category, ProgressSnapshot, Skill, SkillGraph, SkillId};
///
/// let graph = SkillGraph::load(vec![Skill::new("core", "Core", Category::Core, 3)]).unwrap();
/// let mut snapshot = ProgressSnapshot::new();
/// snapshot.grant_stardust(5);
///
/// let id = SkillId::from_str("core");
/// let snapshot = attempt_unlock(&graph, &id, &snapshot).unwrap();
///
/// assert!(snapshot.is_unlocked(&id));
/// assert_eq!(snapshot.balance(), 2);
/// ```
pub fn attempt_unlock(
    graph: &SkillGraph,
    skill_id: &SkillId,
    snapshot: &ProgressSnapshot,
) -> Result<ProgressSnapshot, UnlockError> {
    let skill = graph
        .get(skill_id)
        .ok_or_else(|| UnlockError::UnknownSkill(skill_id.clone()))?;

    if snapshot.is_unlocked(skill_id) {
        return Err(UnlockError::AlreadyUnlocked(skill_id.clone()));
    }

    let decision = evaluate(skill, snapshot);
    if !decision.eligible {
        return Err(UnlockError::Ineligible {
            blocked_by: decision.blocked_by,
        });
    }

    Ok(snapshot.apply_unlock(skill.id.clone(), skill.cost))
}
