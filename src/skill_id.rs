//! Skill identifier module.
//!
//! Provides the `SkillId` type, which is an interned string identifier
//! for skill nodes. Uses `Arc<str>` for memory efficiency and fast
//! comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for skills.
///
/// Uses `Arc<str>` for memory efficiency and fast comparison.
/// Multiple `SkillId` instances with the same string content share the same
/// underlying allocation.
///
/// # Examples
///
/// ```rust
/// use startree::SkillId;
///
/// let hunters = SkillId::from_str("planet-hunters");
/// let scan = SkillId::from_str("deep-scan");
///
/// // Can be created from string slices or owned strings
/// let hunters2: SkillId = "planet-hunters".into();
/// let hunters3: SkillId = String::from("planet-hunters").into();
///
/// assert_eq!(hunters, hunters2);
/// assert_eq!(hunters, hunters3);
/// assert_ne!(hunters, scan);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillId(Arc<str>);

impl Serialize for SkillId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SkillId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SkillId::from(s))
    }
}

impl SkillId {
    /// Create a new `SkillId` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::SkillId;
    ///
    /// let skill_id = SkillId::from_str("planet-hunters");
    /// assert_eq!(skill_id.as_str(), "planet-hunters");
    /// ```
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `SkillId`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::SkillId;
    ///
    /// let skill_id = SkillId::from_str("cloudspotting");
    /// assert_eq!(skill_id.as_str(), "cloudspotting");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for SkillId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_id_creation() {
        let id1 = SkillId::from_str("planet-hunters");
        let id2 = SkillId::from_str("planet-hunters");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "planet-hunters");
    }

    #[test]
    fn test_skill_id_from_string() {
        let id: SkillId = "asteroid-hunting".into();
        assert_eq!(id.as_str(), "asteroid-hunting");
    }

    #[test]
    fn test_skill_id_ordering() {
        let asteroid = SkillId::from_str("asteroid-hunting");
        let planet = SkillId::from_str("planet-hunters");
        assert!(asteroid < planet); // lexicographic
    }

    #[test]
    fn test_skill_id_json_round_trip() {
        let id = SkillId::from_str("cloudspotting");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cloudspotting\"");
        let back: SkillId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
