//! Per-user progress state.
//!
//! Provides the `ProgressSnapshot` type: the complete unlock, classification
//! and stardust state for one user at a point in time. The engine only ever
//! reads snapshots; transitions produce new values (see
//! [`attempt_unlock`](crate::attempt_unlock)), and the persistence layer is
//! responsible for committing them durably.

use crate::skill_id::SkillId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Read-only view of a user's current progression state.
///
/// Holds the set of unlocked skill ids, per-classification-type counters,
/// and the spendable stardust balance. Snapshots are serializable, so they
/// can be loaded from and committed to any persistence layer unchanged.
///
/// Unlocked ids that no longer exist in the current skill graph are kept
/// and treated as satisfied prerequisites; a configuration change never
/// invalidates a user's past unlocks.
///
/// # Examples
///
/// ```rust
/// use startree::ProgressSnapshot;
///
/// let mut snapshot = ProgressSnapshot::new();
/// snapshot.grant_stardust(10);
/// snapshot.record_classification("planet", 3);
///
/// assert_eq!(snapshot.balance(), 10);
/// assert_eq!(snapshot.classification_count("planet"), 3);
/// assert_eq!(snapshot.classification_count("sunspot"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Skill ids already unlocked. Insertion order is irrelevant.
    unlocked: HashSet<SkillId>,
    /// Classification counts keyed by classification type.
    classification_counts: HashMap<String, u64>,
    /// Spendable stardust balance.
    balance: u64,
}

impl ProgressSnapshot {
    /// Create an empty snapshot, as for a freshly registered user.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::ProgressSnapshot;
    ///
    /// let snapshot = ProgressSnapshot::new();
    /// assert_eq!(snapshot.balance(), 0);
    /// assert_eq!(snapshot.unlocked_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a snapshot from stored state.
    ///
    /// This is the hydration path for persistence layers that store the
    /// three fields separately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{ProgressSnapshot, SkillId};
    /// use std::collections::{HashMap, HashSet};
    ///
    /// let mut unlocked = HashSet::new();
    /// unlocked.insert(SkillId::from_str("planet-hunters"));
    ///
    /// let snapshot = ProgressSnapshot::from_parts(unlocked, HashMap::new(), 25);
    /// assert!(snapshot.is_unlocked(&SkillId::from_str("planet-hunters")));
    /// assert_eq!(snapshot.balance(), 25);
    /// ```
    pub fn from_parts(
        unlocked: HashSet<SkillId>,
        classification_counts: HashMap<String, u64>,
        balance: u64,
    ) -> Self {
        Self {
            unlocked,
            classification_counts,
            balance,
        }
    }

    /// Check whether a skill is unlocked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{ProgressSnapshot, SkillId};
    ///
    /// let snapshot = ProgressSnapshot::new();
    /// assert!(!snapshot.is_unlocked(&SkillId::from_str("planet-hunters")));
    /// ```
    pub fn is_unlocked(&self, skill_id: &SkillId) -> bool {
        self.unlocked.contains(skill_id)
    }

    /// Iterate over all unlocked skill ids (unspecified order).
    pub fn unlocked(&self) -> impl Iterator<Item = &SkillId> {
        self.unlocked.iter()
    }

    /// Number of unlocked skills.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Classification count for a type; missing types count as 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::ProgressSnapshot;
    ///
    /// let mut snapshot = ProgressSnapshot::new();
    /// snapshot.record_classification("planet", 2);
    ///
    /// assert_eq!(snapshot.classification_count("planet"), 2);
    /// assert_eq!(snapshot.classification_count("cloud"), 0);
    /// ```
    pub fn classification_count(&self, classification_type: &str) -> u64 {
        self.classification_counts
            .get(classification_type)
            .copied()
            .unwrap_or(0)
    }

    /// Current stardust balance.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Record `count` new classifications of a type.
    ///
    /// This is the classification subsystem's write path into the snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::ProgressSnapshot;
    ///
    /// let mut snapshot = ProgressSnapshot::new();
    /// snapshot.record_classification("planet", 1);
    /// snapshot.record_classification("planet", 3);
    /// assert_eq!(snapshot.classification_count("planet"), 4);
    /// ```
    pub fn record_classification(&mut self, classification_type: impl Into<String>, count: u64) {
        *self
            .classification_counts
            .entry(classification_type.into())
            .or_insert(0) += count;
    }

    /// Add stardust to the balance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::ProgressSnapshot;
    ///
    /// let mut snapshot = ProgressSnapshot::new();
    /// snapshot.grant_stardust(5);
    /// snapshot.grant_stardust(5);
    /// assert_eq!(snapshot.balance(), 10);
    /// ```
    pub fn grant_stardust(&mut self, amount: u64) {
        self.balance += amount;
    }

    /// Produce the post-unlock snapshot: `skill_id` added, `cost` deducted.
    ///
    /// Callers must have verified eligibility first; the transaction layer
    /// guarantees `cost <= balance` before calling this.
    pub(crate) fn apply_unlock(&self, skill_id: SkillId, cost: u64) -> Self {
        let mut next = self.clone();
        next.unlocked.insert(skill_id);
        next.balance -= cost;
        next
    }
}
