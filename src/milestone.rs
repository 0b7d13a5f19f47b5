//! Milestone aggregation module.
//!
//! Read-only folds over a [`SkillGraph`] and a [`ProgressSnapshot`] that
//! drive progress widgets: per-category completion percentages and the
//! "what can I unlock next" list.

use crate::evaluator::evaluate;
use crate::graph::SkillGraph;
use crate::skill::{Category, Skill};
use crate::snapshot::ProgressSnapshot;
use serde::{Deserialize, Serialize};

/// Completion summary for one skill category.
///
/// # Examples
///
/// ```rust
/// use startree::{Category, CategoryProgress};
///
/// let progress = CategoryProgress {
///     category: Category::Core,
///     unlocked_count: 1,
///     total_count: 2,
///     percent: 0.5,
/// };
/// assert_eq!(progress.percent, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// The category being summarized.
    pub category: Category,
    /// Skills in this category present in the unlocked set.
    pub unlocked_count: usize,
    /// Total skills in this category.
    pub total_count: usize,
    /// `unlocked_count / total_count`; 0.0 for an empty category.
    pub percent: f64,
}

/// Summarize unlock progress per category.
///
/// Categories appear in first-seen load order. An empty category reports
/// 0.0 percent rather than dividing by zero (cannot arise from a loaded
/// graph, but the contract holds regardless).
///
/// # Examples
///
/// ```rust
/// use startree::{summarize, Category, ProgressSnapshot, Skill, SkillGraph, SkillId};
///
/// let graph = SkillGraph::load(vec![
///     Skill::new("core-a", "Core A", Category::Core, 0),
///     Skill::new("core-b", "Core B", Category::Core, 0),
/// ])
/// .unwrap();
///
/// let snapshot = ProgressSnapshot::new();
/// let snapshot = startree::attempt_unlock(&graph, &SkillId::from_str("core-a"), &snapshot).unwrap();
///
/// let summary = summarize(&graph, &snapshot);
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary[0].unlocked_count, 1);
/// assert_eq!(summary[0].total_count, 2);
/// assert_eq!(summary[0].percent, 0.5);
/// ```
pub fn summarize(graph: &SkillGraph, snapshot: &ProgressSnapshot) -> Vec<CategoryProgress> {
    let mut summary: Vec<CategoryProgress> = Vec::new();

    for skill in graph.all() {
        let position = match summary.iter().position(|p| p.category == skill.category) {
            Some(position) => position,
            None => {
                summary.push(CategoryProgress {
                    category: skill.category.clone(),
                    unlocked_count: 0,
                    total_count: 0,
                    percent: 0.0,
                });
                summary.len() - 1
            }
        };
        let entry = &mut summary[position];
        entry.total_count += 1;
        if snapshot.is_unlocked(&skill.id) {
            entry.unlocked_count += 1;
        }
    }

    for entry in &mut summary {
        if entry.total_count > 0 {
            entry.percent = entry.unlocked_count as f64 / entry.total_count as f64;
        }
    }

    summary
}

/// List the skills currently eligible to unlock, cheapest first.
///
/// Filtered to those where [`evaluate`] reports eligibility; ties in cost
/// keep load order (stable sort). Drives "what can I unlock next" UI
/// prompts.
///
/// # Examples
///
/// ```rust
/// use startree::{next_unlockable, Category, ProgressSnapshot, Skill, SkillGraph};
///
/// let graph = SkillGraph::load(vec![
///     Skill::new("pricey", "Pricey", Category::Core, 8),
///     Skill::new("cheap", "Cheap", Category::Core, 2),
/// ])
/// .unwrap();
///
/// let mut snapshot = ProgressSnapshot::new();
/// snapshot.grant_stardust(10);
///
/// let next: Vec<&str> = next_unlockable(&graph, &snapshot)
///     .iter()
///     .map(|s| s.id.as_str())
///     .collect();
/// assert_eq!(next, ["cheap", "pricey"]);
/// ```
pub fn next_unlockable<'a>(
    graph: &'a SkillGraph,
    snapshot: &ProgressSnapshot,
) -> Vec<&'a Skill> {
    let mut unlockable: Vec<&Skill> = graph
        .all()
        .filter(|skill| evaluate(*skill, snapshot).eligible)
        .collect();
    unlockable.sort_by_key(|skill| skill.cost);
    unlockable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Prerequisite;
    use crate::skill_id::SkillId;

    fn graph() -> SkillGraph {
        SkillGraph::load(vec![
            Skill::new("core-a", "Core A", Category::Core, 0),
            Skill::new("core-b", "Core B", Category::Core, 4),
            Skill::new("planet-a", "Planet A", Category::Planet, 2)
                .with_prerequisite(Prerequisite::skill("core-a")),
        ])
        .unwrap()
    }

    #[test]
    fn test_summarize_counts_per_category() {
        let graph = graph();
        let snapshot = ProgressSnapshot::new().apply_unlock(SkillId::from_str("core-a"), 0);

        let summary = summarize(&graph, &snapshot);
        assert_eq!(summary.len(), 2);

        // First-seen order: Core, then Planet.
        assert_eq!(summary[0].category, Category::Core);
        assert_eq!(summary[0].unlocked_count, 1);
        assert_eq!(summary[0].total_count, 2);
        assert_eq!(summary[0].percent, 0.5);

        assert_eq!(summary[1].category, Category::Planet);
        assert_eq!(summary[1].unlocked_count, 0);
        assert_eq!(summary[1].percent, 0.0);
    }

    #[test]
    fn test_summarize_empty_graph() {
        let graph = SkillGraph::load(Vec::new()).unwrap();
        assert!(summarize(&graph, &ProgressSnapshot::new()).is_empty());
    }

    #[test]
    fn test_summarize_full_completion() {
        let graph = SkillGraph::load(vec![Skill::new("solo", "Solo", Category::Asteroid, 0)])
            .unwrap();
        let snapshot = ProgressSnapshot::new().apply_unlock(SkillId::from_str("solo"), 0);
        let summary = summarize(&graph, &snapshot);
        assert_eq!(summary[0].percent, 1.0);
    }

    #[test]
    fn test_next_unlockable_sorted_by_cost() {
        let graph = graph();
        let mut snapshot = ProgressSnapshot::new();
        snapshot.grant_stardust(10);
        let snapshot = snapshot.apply_unlock(SkillId::from_str("core-a"), 0);

        let next: Vec<&str> = next_unlockable(&graph, &snapshot)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        // planet-a (2) before core-b (4); core-a excluded as unlocked.
        assert_eq!(next, ["planet-a", "core-b"]);
    }

    #[test]
    fn test_next_unlockable_excludes_unaffordable() {
        let graph = graph();
        let snapshot = ProgressSnapshot::new(); // zero balance

        let next: Vec<&str> = next_unlockable(&graph, &snapshot)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        // Only core-a is free and prerequisite-free.
        assert_eq!(next, ["core-a"]);
    }

    #[test]
    fn test_next_unlockable_cost_tie_keeps_load_order() {
        let graph = SkillGraph::load(vec![
            Skill::new("second", "Second", Category::Core, 1),
            Skill::new("first", "First", Category::Core, 1),
        ])
        .unwrap();
        let mut snapshot = ProgressSnapshot::new();
        snapshot.grant_stardust(5);

        let next: Vec<&str> = next_unlockable(&graph, &snapshot)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(next, ["second", "first"]);
    }
}
