//! # startree - Deterministic Research Skill-Tree Engine
//!
//! The unlock and progression core behind Star Sailors' research screen:
//! players earn stardust and classification counts by doing citizen
//! science, and spend them unlocking nodes in a skill graph.
//!
//! - **Deterministic** evaluation (same snapshot → same decision)
//! - **Validated** graphs (duplicate ids, dangling references and
//!   prerequisite cycles are rejected at load time, never at play time)
//! - **Pure** transactions (unlocks produce a new snapshot; persistence
//!   commits it atomically, outside this crate)
//!
//! ## Core Concepts
//!
//! ### Unlock Pipeline
//!
//! A skill moves through three states from one user's perspective:
//!
//! ```text
//! Locked -> (prerequisites + cost satisfied) -> Available -> (unlock) -> Unlocked
//! ```
//!
//! Only `Unlocked` is stored (membership in the snapshot's unlocked set);
//! the other two are computed on demand. There is no downgrade path.
//!
//! ### Key Pieces
//!
//! - **SkillGraph**: immutable, validated skill definitions with O(1)
//!   lookup and load-order iteration
//! - **ProgressSnapshot**: one user's unlocked set, classification
//!   counters and stardust balance
//! - **evaluate**: pure eligibility check with a structured `blocked_by`
//!   explanation
//! - **attempt_unlock**: all-or-nothing spend-and-record state transition
//! - **summarize / next_unlockable**: display-ready progress folds
//!
//! ## Example
//!
//! ```rust
//! use startree::*;
//!
//! let graph = SkillGraph::load(vec![
//!     Skill::new("core", "Core Research", Category::Core, 0),
//!     Skill::new("scan", "Deep Scan", Category::Core, 10)
//!         .with_prerequisite(Prerequisite::skill("core"))
//!         .with_prerequisite(Prerequisite::progress("planet", 4)),
//! ])
//! .unwrap();
//!
//! let mut snapshot = ProgressSnapshot::new();
//! snapshot.grant_stardust(10);
//! snapshot.record_classification("planet", 4);
//!
//! // Unlock the root, then its dependent becomes available.
//! let snapshot = attempt_unlock(&graph, &SkillId::from_str("core"), &snapshot).unwrap();
//! let scan = graph.get(&SkillId::from_str("scan")).unwrap();
//! assert!(evaluate(scan, &snapshot).eligible);
//!
//! let snapshot = attempt_unlock(&graph, &scan.id, &snapshot).unwrap();
//! assert_eq!(snapshot.balance(), 0);
//! assert_eq!(status(scan, &snapshot), SkillStatus::Unlocked);
//! ```
//!
//! ## Modules
//!
//! - [`skill_id`] - Skill identifier type
//! - [`skill`] - Skill, prerequisite and category definitions
//! - [`config`] - JSON configuration loading (incl. legacy rule parsing)
//! - [`graph`] - Validated skill graph
//! - [`snapshot`] - Per-user progress state
//! - [`evaluator`] - Pure eligibility evaluation
//! - [`transaction`] - All-or-nothing unlock transitions
//! - [`milestone`] - Display-ready progress summaries
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod milestone;
pub mod skill;
pub mod skill_id;
pub mod snapshot;
pub mod transaction;

// Re-export main types for convenience
pub use error::{UnlockError, ValidationError};
pub use graph::SkillGraph;
pub use skill::{Category, Prerequisite, Skill};
pub use skill_id::SkillId;
pub use snapshot::ProgressSnapshot;

// Re-export the evaluation and transaction entry points
pub use evaluator::{evaluate, status, SkillStatus, UnlockDecision};
pub use milestone::{next_unlockable, summarize, CategoryProgress};
pub use transaction::attempt_unlock;
