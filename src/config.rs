//! Skill configuration loading.
//!
//! Skill definitions ship as a JSON array of objects. Prerequisites accept
//! two spellings: the typed tagged object form, and the legacy prose form
//! carried over from the original skill-tree data files:
//!
//! ```json
//! [
//!     { "id": "planet-hunters", "name": "Planet Hunters",
//!       "category": "planet", "cost": 0 },
//!     { "id": "cloudspotting", "name": "Cloudspotting",
//!       "category": "planet", "cost": 5,
//!       "prerequisites": [
//!           { "kind": "skill", "skill_id": "planet-hunters" },
//!           "4 planets classified"
//!       ] }
//! ]
//! ```
//!
//! Legacy strings are parsed exactly once, here; evaluation only ever sees
//! the typed [`Prerequisite`] form.

use crate::error::ValidationError;
use crate::skill::{Category, Prerequisite, Skill};
use crate::skill_id::SkillId;
use serde::Deserialize;

/// A prerequisite as written in configuration: typed, or legacy prose.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PrerequisiteDef {
    Typed(Prerequisite),
    Legacy(String),
}

impl PrerequisiteDef {
    fn into_prerequisite(self) -> Result<Prerequisite, ValidationError> {
        match self {
            PrerequisiteDef::Typed(prerequisite) => Ok(prerequisite),
            PrerequisiteDef::Legacy(rule) => Prerequisite::parse_legacy(&rule),
        }
    }
}

/// A skill definition as written in configuration.
#[derive(Debug, Deserialize)]
struct SkillDef {
    id: SkillId,
    name: String,
    #[serde(default)]
    description: String,
    cost: u64,
    #[serde(default)]
    prerequisites: Vec<PrerequisiteDef>,
    category: Category,
}

impl SkillDef {
    fn into_skill(self) -> Result<Skill, ValidationError> {
        let prerequisites = self
            .prerequisites
            .into_iter()
            .map(PrerequisiteDef::into_prerequisite)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Skill {
            id: self.id,
            name: self.name,
            description: self.description,
            cost: self.cost,
            prerequisites,
            category: self.category,
        })
    }
}

/// Decode a JSON configuration document into skill definitions.
///
/// Definition order is preserved; it becomes the graph's load order.
/// Decode failures and malformed legacy rules are both load-time
/// [`ValidationError`]s.
///
/// # Examples
///
/// ```rust
/// use startree::config::load_skills;
/// use startree::Prerequisite;
///
/// let skills = load_skills(
///     r#"[{ "id": "watch", "name": "Watch", "category": "planet", "cost": 5,
///           "prerequisites": ["4 planets classified"] }]"#,
/// )
/// .unwrap();
///
/// assert_eq!(skills[0].prerequisites, vec![Prerequisite::progress("planet", 4)]);
/// ```
pub fn load_skills(document: &str) -> Result<Vec<Skill>, ValidationError> {
    let defs: Vec<SkillDef> = serde_json::from_str(document)
        .map_err(|err| ValidationError::Config(err.to_string()))?;
    defs.into_iter().map(SkillDef::into_skill).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_typed_and_legacy_prerequisites() {
        let skills = load_skills(
            r#"[
                { "id": "planet-hunters", "name": "Planet Hunters",
                  "category": "planet", "cost": 0 },
                { "id": "cloudspotting", "name": "Cloudspotting",
                  "category": "planet", "cost": 5,
                  "prerequisites": [
                      { "kind": "skill", "skill_id": "planet-hunters" },
                      "4 planets classified"
                  ] }
            ]"#,
        )
        .unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(
            skills[1].prerequisites,
            vec![
                Prerequisite::skill("planet-hunters"),
                Prerequisite::progress("planet", 4),
            ]
        );
    }

    #[test]
    fn test_load_preserves_order() {
        let skills = load_skills(
            r#"[
                { "id": "z", "name": "Z", "category": "core", "cost": 0 },
                { "id": "a", "name": "A", "category": "core", "cost": 0 }
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
    }

    #[test]
    fn test_load_unknown_category_is_other() {
        let skills = load_skills(
            r#"[{ "id": "s", "name": "S", "category": "sunspot", "cost": 0 }]"#,
        )
        .unwrap();
        assert_eq!(skills[0].category, Category::Other("sunspot".to_string()));
    }

    #[test]
    fn test_load_rejects_malformed_legacy_rule() {
        let err = load_skills(
            r#"[{ "id": "s", "name": "S", "category": "core", "cost": 0,
                  "prerequisites": ["some planets maybe"] }]"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedRule("some planets maybe".to_string())
        );
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let err = load_skills("not json").unwrap_err();
        assert!(matches!(err, ValidationError::Config(_)));
    }

    #[test]
    fn test_load_rejects_negative_cost() {
        // cost is u64 in the schema; negatives fail at decode time.
        let err = load_skills(
            r#"[{ "id": "s", "name": "S", "category": "core", "cost": -1 }]"#,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Config(_)));
    }
}
