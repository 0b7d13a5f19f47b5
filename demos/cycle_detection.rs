//! Cycle detection example: invalid configurations fail at load time
//!
//! This example demonstrates:
//! - How a hand-authored prerequisite cycle is rejected
//! - The diagnostic cycle path carried by the error

use startree::*;

fn main() {
    // Three skills that (accidentally) require each other in a ring.
    let result = SkillGraph::load(vec![
        Skill::new("spectroscopy", "Spectroscopy", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("calibration")),
        Skill::new("photometry", "Photometry", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("spectroscopy")),
        Skill::new("calibration", "Calibration", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("photometry")),
    ]);

    match result {
        Ok(_) => println!("Unexpectedly loaded a cyclic tree!"),
        Err(err) => {
            println!("Load refused: {}", err);
            if let ValidationError::Cycle { path } = err {
                println!("\nCycle path, node by node:");
                for id in &path {
                    println!("  -> {}", id);
                }
            }
        }
    }

    // The same skills with the ring broken load fine.
    let graph = SkillGraph::load(vec![
        Skill::new("calibration", "Calibration", Category::Planet, 5),
        Skill::new("spectroscopy", "Spectroscopy", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("calibration")),
        Skill::new("photometry", "Photometry", Category::Planet, 5)
            .with_prerequisite(Prerequisite::skill("spectroscopy")),
    ]);

    match graph {
        Ok(graph) => println!("\nFixed tree loads: {} skills", graph.len()),
        Err(err) => println!("\nStill broken: {}", err),
    }
}
