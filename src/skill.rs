//! Skill definition module.
//!
//! Provides the `Skill` node type along with its `Prerequisite` conditions
//! and display `Category`. Skills are immutable once loaded into a
//! [`SkillGraph`](crate::SkillGraph); all fields relevant to unlock logic
//! (`cost`, `prerequisites`) are fixed at configuration-load time.

use crate::error::ValidationError;
use crate::skill_id::SkillId;
use serde::{Deserialize, Serialize};

/// A condition gating a skill's unlock.
///
/// Two kinds exist:
/// - `Skill`: another skill must already be unlocked.
/// - `Progress`: the user must have at least `min_count` classifications
///   of the given type.
///
/// Legacy string-encoded rules (e.g. `"4 planets classified"`) are parsed
/// into the `Progress` form exactly once, at configuration-load time, via
/// [`Prerequisite::parse_legacy`]. Evaluation never re-parses strings.
///
/// # Examples
///
/// ```rust
/// use startree::Prerequisite;
///
/// let gate = Prerequisite::skill("planet-hunters");
/// let threshold = Prerequisite::progress("planet", 4);
///
/// // Serializes as a tagged object
/// let json = serde_json::to_string(&threshold).unwrap();
/// assert_eq!(
///     json,
///     r#"{"kind":"progress","classification_type":"planet","min_count":4}"#
/// );
/// # let _ = gate;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prerequisite {
    /// Requires another skill to be unlocked first.
    Skill {
        /// Identifier of the required skill.
        skill_id: SkillId,
    },
    /// Requires a minimum number of classifications of one type.
    Progress {
        /// Classification type, opaque to this engine (owned by the
        /// classification subsystem).
        classification_type: String,
        /// Minimum count required; satisfied at `count >= min_count`.
        min_count: u64,
    },
}

impl Prerequisite {
    /// Create a skill-unlock prerequisite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::Prerequisite;
    ///
    /// let prereq = Prerequisite::skill("planet-hunters");
    /// ```
    pub fn skill(skill_id: impl Into<SkillId>) -> Self {
        Self::Skill {
            skill_id: skill_id.into(),
        }
    }

    /// Create a classification-count prerequisite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::Prerequisite;
    ///
    /// let prereq = Prerequisite::progress("planet", 4);
    /// ```
    pub fn progress(classification_type: impl Into<String>, min_count: u64) -> Self {
        Self::Progress {
            classification_type: classification_type.into(),
            min_count,
        }
    }

    /// Parse a legacy string-encoded progress rule.
    ///
    /// The legacy skill-tree configuration expressed thresholds as prose,
    /// e.g. `"4 planets classified"`. The accepted shape is
    /// `<count> <classification type..> classified`; a single trailing `s`
    /// on the type is stripped so `"planets"` becomes `"planet"`.
    ///
    /// This is called by the configuration loader only. Rules that do not
    /// match the shape fail with [`ValidationError::MalformedRule`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::Prerequisite;
    ///
    /// let prereq = Prerequisite::parse_legacy("4 planets classified").unwrap();
    /// assert_eq!(prereq, Prerequisite::progress("planet", 4));
    ///
    /// assert!(Prerequisite::parse_legacy("classify some planets").is_err());
    /// ```
    pub fn parse_legacy(rule: &str) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = rule.split_whitespace().collect();
        let malformed = || ValidationError::MalformedRule(rule.to_string());

        if tokens.len() < 3 || tokens[tokens.len() - 1] != "classified" {
            return Err(malformed());
        }
        let min_count: u64 = tokens[0].parse().map_err(|_| malformed())?;
        let subject = tokens[1..tokens.len() - 1].join(" ");
        let classification_type = subject.strip_suffix('s').unwrap_or(&subject).to_string();
        if classification_type.is_empty() {
            return Err(malformed());
        }

        Ok(Self::Progress {
            classification_type,
            min_count,
        })
    }
}

/// Display grouping for skills.
///
/// Categories only affect grouping and milestone summaries, never unlock
/// logic. Unrecognized tags from configuration land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Planet classification skills.
    Planet,
    /// Asteroid discovery skills.
    Asteroid,
    /// Core progression skills.
    Core,
    /// Authored but not yet released skills.
    Locked,
    /// Any other grouping tag.
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Planet => write!(f, "planet"),
            Category::Asteroid => write!(f, "asteroid"),
            Category::Core => write!(f, "core"),
            Category::Locked => write!(f, "locked"),
            Category::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A single unlockable node in the research progression graph.
///
/// Skills are defined at process startup from static configuration and
/// never change afterwards. `name` and `description` are display text and
/// irrelevant to unlock logic.
///
/// # Examples
///
/// ```rust
/// use startree::{Category, Prerequisite, Skill};
///
/// let skill = Skill::new("deep-scan", "Deep Scan", Category::Planet, 10)
///     .with_description("Unlocks high-resolution planetary scans.")
///     .with_prerequisite(Prerequisite::skill("planet-hunters"))
///     .with_prerequisite(Prerequisite::progress("planet", 4));
///
/// assert_eq!(skill.cost, 10);
/// assert_eq!(skill.prerequisites.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier.
    pub id: SkillId,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Stardust cost to unlock.
    pub cost: u64,
    /// Conditions gating the unlock, checked in order.
    #[serde(default)]
    pub prerequisites: Vec<Prerequisite>,
    /// Display grouping.
    pub category: Category,
}

impl Skill {
    /// Create a skill with no description and no prerequisites.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{Category, Skill};
    ///
    /// let root = Skill::new("planet-hunters", "Planet Hunters", Category::Planet, 0);
    /// assert!(root.prerequisites.is_empty());
    /// ```
    pub fn new(
        id: impl Into<SkillId>,
        name: impl Into<String>,
        category: Category,
        cost: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost,
            prerequisites: Vec::new(),
            category,
        }
    }

    /// Set the display description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a prerequisite.
    ///
    /// Prerequisites keep their insertion order, which is also the order
    /// they are reported in `blocked_by` lists.
    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }
}
