//! Basic example: load a skill tree, evaluate, and unlock
//!
//! This example demonstrates:
//! - Loading a skill graph from JSON configuration
//! - Evaluating unlock eligibility
//! - Applying unlock transactions and reading milestone summaries

use startree::*;

fn main() -> Result<(), ValidationError> {
    // Load the tree from configuration; legacy prose rules are parsed
    // into typed prerequisites here, once.
    let graph = SkillGraph::from_json(
        r#"[
            { "id": "planet-hunters", "name": "Planet Hunters",
              "category": "planet", "cost": 0 },
            { "id": "planet-exploration", "name": "Planet Exploration",
              "category": "planet", "cost": 5,
              "prerequisites": [ { "kind": "skill", "skill_id": "planet-hunters" } ] },
            { "id": "cloudspotting", "name": "Cloudspotting",
              "category": "planet", "cost": 5,
              "prerequisites": [
                  { "kind": "skill", "skill_id": "planet-exploration" },
                  "4 planets classified"
              ] }
        ]"#,
    )?;

    println!("Loaded {} skills:", graph.len());
    let depths = graph.depths();
    for skill in graph.all() {
        println!(
            "  [{}] {} (cost {}, depth {})",
            skill.category, skill.name, skill.cost, depths[&skill.id]
        );
    }

    // A user who has classified some planets and earned some stardust.
    let mut snapshot = ProgressSnapshot::new();
    snapshot.grant_stardust(10);
    snapshot.record_classification("planet", 4);

    println!("\nBalance: {} stardust", snapshot.balance());
    println!("Planet classifications: {}", snapshot.classification_count("planet"));

    // Walk the chain.
    for id in ["planet-hunters", "planet-exploration", "cloudspotting"] {
        let skill_id = SkillId::from_str(id);
        match attempt_unlock(&graph, &skill_id, &snapshot) {
            Ok(next) => {
                println!(
                    "\nUnlocked {} (balance {} -> {})",
                    id,
                    snapshot.balance(),
                    next.balance()
                );
                snapshot = next;
            }
            Err(err) => println!("\nCould not unlock {}: {}", id, err),
        }
    }

    // Milestone summary for the progress widget.
    println!("\n=== Category Progress ===");
    for progress in summarize(&graph, &snapshot) {
        println!(
            "  {}: {}/{} ({:.0}%)",
            progress.category,
            progress.unlocked_count,
            progress.total_count,
            progress.percent * 100.0
        );
    }

    Ok(())
}
