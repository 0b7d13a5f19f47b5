use startree::*;
use std::collections::{HashMap, HashSet};

fn snapshot_with_unlocked(ids: &[&str], balance: u64) -> ProgressSnapshot {
    let unlocked: HashSet<SkillId> = ids.iter().map(|id| SkillId::from_str(id)).collect();
    ProgressSnapshot::from_parts(unlocked, HashMap::new(), balance)
}

fn scenario_graph() -> SkillGraph {
    SkillGraph::load(vec![
        Skill::new("core", "Core Research", Category::Core, 0),
        Skill::new("scan", "Deep Scan", Category::Core, 10)
            .with_prerequisite(Prerequisite::skill("core")),
    ])
    .unwrap()
}

fn snapshot_with_balance(balance: u64) -> ProgressSnapshot {
    let mut snapshot = ProgressSnapshot::new();
    snapshot.grant_stardust(balance);
    snapshot
}

/// Fresh account, 5 stardust: the free root is available, its dependent is
/// blocked by the root.
#[test]
fn test_root_available_dependent_blocked() {
    let graph = scenario_graph();
    let snapshot = snapshot_with_balance(5);

    let core = graph.get(&SkillId::from_str("core")).unwrap();
    let decision = evaluate(core, &snapshot);
    assert!(decision.eligible);
    assert!(decision.blocked_by.is_empty());

    let scan = graph.get(&SkillId::from_str("scan")).unwrap();
    let decision = evaluate(scan, &snapshot);
    assert!(!decision.eligible);
    assert_eq!(decision.blocked_by, vec![Prerequisite::skill("core")]);
}

/// After unlocking the root, the dependent's prerequisite is satisfied but
/// the cost still blocks it; cost is not reported in blocked_by.
#[test]
fn test_prerequisite_met_cost_short() {
    let graph = scenario_graph();
    let snapshot = snapshot_with_balance(5);

    let snapshot = attempt_unlock(&graph, &SkillId::from_str("core"), &snapshot).unwrap();
    assert!(snapshot.is_unlocked(&SkillId::from_str("core")));
    assert_eq!(snapshot.balance(), 5); // root was free

    let scan = graph.get(&SkillId::from_str("scan")).unwrap();
    let decision = evaluate(scan, &snapshot);
    assert!(!decision.eligible); // 10 > 5
    assert!(decision.blocked_by.is_empty()); // prerequisite satisfied
}

/// With the prerequisite met and an exact balance, the unlock succeeds and
/// spends down to zero.
#[test]
fn test_unlock_spends_exact_balance() {
    let graph = scenario_graph();
    let snapshot = snapshot_with_balance(10);

    let snapshot = attempt_unlock(&graph, &SkillId::from_str("core"), &snapshot).unwrap();
    let snapshot = attempt_unlock(&graph, &SkillId::from_str("scan"), &snapshot).unwrap();

    assert!(snapshot.is_unlocked(&SkillId::from_str("scan")));
    assert_eq!(snapshot.balance(), 0);
}

/// Classification thresholds are inclusive: 3 of 4 blocks, 4 of 4 passes.
#[test]
fn test_progress_threshold_is_inclusive() {
    let graph = SkillGraph::load(vec![Skill::new(
        "cloudspotting",
        "Cloudspotting",
        Category::Planet,
        0,
    )
    .with_prerequisite(Prerequisite::progress("planet", 4))])
    .unwrap();
    let skill = graph.get(&SkillId::from_str("cloudspotting")).unwrap();

    let mut snapshot = ProgressSnapshot::new();
    snapshot.record_classification("planet", 3);
    assert!(!evaluate(skill, &snapshot).eligible);

    snapshot.record_classification("planet", 1);
    assert!(evaluate(skill, &snapshot).eligible);
}

/// Category summary: 2 core skills, 1 unlocked -> 50%.
#[test]
fn test_category_progress_percentages() {
    let graph = scenario_graph();
    let snapshot = attempt_unlock(
        &graph,
        &SkillId::from_str("core"),
        &snapshot_with_balance(0),
    )
    .unwrap();

    let summary = summarize(&graph, &snapshot);
    assert_eq!(summary.len(), 1);
    assert_eq!(
        summary[0],
        CategoryProgress {
            category: Category::Core,
            unlocked_count: 1,
            total_count: 2,
            percent: 0.5,
        }
    );
}

/// Replaying an unlock against the committed snapshot is a benign error,
/// and the committed state shows exactly one deduction.
#[test]
fn test_unlock_idempotence() {
    let graph = scenario_graph();
    let pre_unlock = snapshot_with_balance(10);
    let pre_unlock = attempt_unlock(&graph, &SkillId::from_str("core"), &pre_unlock).unwrap();

    let committed = attempt_unlock(&graph, &SkillId::from_str("scan"), &pre_unlock).unwrap();
    assert_eq!(committed.balance(), 0);

    // Duplicate click against the committed snapshot: refused, unchanged.
    let err = attempt_unlock(&graph, &SkillId::from_str("scan"), &committed).unwrap_err();
    assert_eq!(err, UnlockError::AlreadyUnlocked(SkillId::from_str("scan")));
    assert_eq!(committed.balance(), 0);

    // Replaying against the stale pre-unlock snapshot yields the same
    // transition, not a second deduction on top of the committed one.
    let replayed = attempt_unlock(&graph, &SkillId::from_str("scan"), &pre_unlock).unwrap();
    assert_eq!(replayed, committed);
}

/// Eligibility never flips from true to false as the balance grows.
#[test]
fn test_eligibility_monotonic_in_balance() {
    let graph = scenario_graph();
    let scan = graph.get(&SkillId::from_str("scan")).unwrap();

    let mut was_eligible = false;
    for balance in 0..=30 {
        let snapshot = snapshot_with_unlocked(&["core"], balance);
        let eligible = evaluate(scan, &snapshot).eligible;
        assert!(!was_eligible || eligible, "eligibility regressed at balance {balance}");
        was_eligible = eligible;
    }
    assert!(was_eligible);
}

/// Evaluation is referentially transparent.
#[test]
fn test_evaluate_deterministic() {
    let graph = scenario_graph();
    let scan = graph.get(&SkillId::from_str("scan")).unwrap();
    let snapshot = snapshot_with_balance(7);

    let first = evaluate(scan, &snapshot);
    let second = evaluate(scan, &snapshot);
    assert_eq!(first, second);
}

/// Stale unlocked ids (skills removed from the graph) satisfy prerequisites
/// and never make evaluation or summaries error.
#[test]
fn test_stale_unlocked_ids_tolerated() {
    let graph = scenario_graph();
    let snapshot = snapshot_with_unlocked(&["core", "retired-2019-skill"], 0);

    assert!(graph.get(&SkillId::from_str("retired-2019-skill")).is_none());

    let summary = summarize(&graph, &snapshot);
    assert_eq!(summary[0].unlocked_count, 1); // stale id not counted anywhere

    let scan = graph.get(&SkillId::from_str("scan")).unwrap();
    let decision = evaluate(scan, &snapshot);
    assert!(decision.blocked_by.is_empty());
}

/// A full session walk: classify, earn, unlock down a chain, watch the
/// milestone summary advance.
#[test]
fn test_progression_walkthrough() {
    let graph = SkillGraph::load(vec![
        Skill::new("planet-hunters", "Planet Hunters", Category::Planet, 0),
        Skill::new("planet-exploration", "Planet Exploration", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("planet-hunters")),
        Skill::new("cloudspotting", "Cloudspotting", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("planet-exploration"))
            .with_prerequisite(Prerequisite::progress("planet", 4)),
        Skill::new("asteroid-hunting", "Asteroid Hunting", Category::Asteroid, 5)
            .with_prerequisite(Prerequisite::skill("planet-hunters")),
    ])
    .unwrap();

    let mut snapshot = ProgressSnapshot::new();
    snapshot.grant_stardust(12);
    snapshot.record_classification("planet", 4);

    let snapshot =
        attempt_unlock(&graph, &SkillId::from_str("planet-hunters"), &snapshot).unwrap();
    let snapshot =
        attempt_unlock(&graph, &SkillId::from_str("planet-exploration"), &snapshot).unwrap();
    let snapshot =
        attempt_unlock(&graph, &SkillId::from_str("cloudspotting"), &snapshot).unwrap();
    assert_eq!(snapshot.balance(), 2);

    let summary = summarize(&graph, &snapshot);
    assert_eq!(summary[0].category, Category::Planet);
    assert_eq!(summary[0].percent, 1.0);
    assert_eq!(summary[1].category, Category::Asteroid);
    assert_eq!(summary[1].percent, 0.0);

    // Can't afford asteroid-hunting anymore.
    let next: Vec<&str> = next_unlockable(&graph, &snapshot)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert!(next.is_empty());
}
