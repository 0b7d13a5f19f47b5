//! Skill graph module.
//!
//! Provides the `SkillGraph` type: the authoritative, validated set of
//! skill definitions with O(1) lookup by id. Prerequisite edges between
//! skills form a directed acyclic graph (DAG); loading rejects duplicate
//! ids, dangling references and cycles, so every served graph is known
//! valid.

use crate::config;
use crate::error::ValidationError;
use crate::skill::{Prerequisite, Skill};
use crate::skill_id::SkillId;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// The validated, immutable set of skill definitions.
///
/// Nodes are skills, edges are `Prerequisite::Skill` references (an edge
/// from A to B means B requires A). Iteration order equals load order, so
/// UI ordering and tests are deterministic.
///
/// # Examples
///
/// ```rust
/// use startree::{Category, Prerequisite, Skill, SkillGraph, SkillId};
///
/// let graph = SkillGraph::load(vec![
///     Skill::new("core", "Core Research", Category::Core, 0),
///     Skill::new("scan", "Deep Scan", Category::Core, 10)
///         .with_prerequisite(Prerequisite::skill("core")),
/// ])
/// .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert!(graph.get(&SkillId::from_str("scan")).is_some());
/// assert!(graph.get(&SkillId::from_str("ghost")).is_none());
/// ```
#[derive(Debug)]
pub struct SkillGraph {
    /// Skills in load order.
    skills: Vec<Skill>,
    /// Id to position in `skills`.
    index: HashMap<SkillId, usize>,
    /// Prerequisite edges, dependency -> dependent.
    graph: DiGraph<SkillId, ()>,
}

impl SkillGraph {
    /// Load and validate a set of skill definitions.
    ///
    /// Fails with a [`ValidationError`] if:
    /// - two skills share an id,
    /// - a `Prerequisite::Skill` references an id not in the set,
    /// - the prerequisite edges contain a cycle (reported with the full
    ///   cycle path for diagnostics).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{Category, Prerequisite, Skill, SkillGraph, ValidationError};
    ///
    /// // A skill requiring itself is the smallest possible cycle.
    /// let err = SkillGraph::load(vec![Skill::new("a", "A", Category::Core, 0)
    ///     .with_prerequisite(Prerequisite::skill("a"))])
    /// .unwrap_err();
    ///
    /// assert!(matches!(err, ValidationError::Cycle { .. }));
    /// ```
    pub fn load(skills: Vec<Skill>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(skills.len());
        for (position, skill) in skills.iter().enumerate() {
            if index.insert(skill.id.clone(), position).is_some() {
                return Err(ValidationError::DuplicateId(skill.id.clone()));
            }
        }

        // Build the prerequisite edge graph, checking references as we go.
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::with_capacity(skills.len());
        for skill in &skills {
            let idx = graph.add_node(skill.id.clone());
            node_map.insert(skill.id.clone(), idx);
        }
        for skill in &skills {
            for prerequisite in &skill.prerequisites {
                if let Prerequisite::Skill { skill_id } = prerequisite {
                    let Some(&required_idx) = node_map.get(skill_id) else {
                        return Err(ValidationError::DanglingPrerequisite {
                            skill: skill.id.clone(),
                            missing: skill_id.clone(),
                        });
                    };
                    let dependent_idx = node_map[&skill.id];
                    graph.add_edge(required_idx, dependent_idx, ());
                }
            }
        }

        let loaded = Self {
            skills,
            index,
            graph,
        };
        loaded.detect_cycles()?;
        Ok(loaded)
    }

    /// Load a skill graph from a JSON configuration document.
    ///
    /// Legacy string-encoded rules in the document are parsed into typed
    /// prerequisites here, once; see [`config`](crate::config) for the
    /// accepted format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::SkillGraph;
    ///
    /// let graph = SkillGraph::from_json(
    ///     r#"[
    ///         { "id": "planet-hunters", "name": "Planet Hunters",
    ///           "category": "planet", "cost": 0 },
    ///         { "id": "cloudspotting", "name": "Cloudspotting",
    ///           "category": "planet", "cost": 5,
    ///           "prerequisites": [
    ///               { "kind": "skill", "skill_id": "planet-hunters" },
    ///               "4 planets classified"
    ///           ] }
    ///     ]"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.len(), 2);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ValidationError> {
        Self::load(config::load_skills(document)?)
    }

    /// Look up a skill by id.
    ///
    /// Not-found is a normal outcome (e.g. a stale reference held by a
    /// snapshot), not an error.
    pub fn get(&self, skill_id: &SkillId) -> Option<&Skill> {
        self.index.get(skill_id).map(|&position| &self.skills[position])
    }

    /// Check if a skill id exists in the graph.
    pub fn contains(&self, skill_id: &SkillId) -> bool {
        self.index.contains_key(skill_id)
    }

    /// Iterate over all skills in load order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{Category, Skill, SkillGraph};
    ///
    /// let graph = SkillGraph::load(vec![
    ///     Skill::new("b", "B", Category::Core, 0),
    ///     Skill::new("a", "A", Category::Core, 0),
    /// ])
    /// .unwrap();
    ///
    /// let ids: Vec<&str> = graph.all().map(|s| s.id.as_str()).collect();
    /// assert_eq!(ids, ["b", "a"]); // load order, not sorted
    /// ```
    pub fn all(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    /// Number of skills in the graph.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the graph holds no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Compute the display depth of every skill.
    ///
    /// A skill with no skill prerequisites has depth 0; otherwise its depth
    /// is one more than the deepest skill it requires. UIs use this to lay
    /// skills out in columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use startree::{Category, Prerequisite, Skill, SkillGraph, SkillId};
    ///
    /// let graph = SkillGraph::load(vec![
    ///     Skill::new("core", "Core", Category::Core, 0),
    ///     Skill::new("scan", "Scan", Category::Core, 5)
    ///         .with_prerequisite(Prerequisite::skill("core")),
    ///     Skill::new("map", "Map", Category::Core, 5)
    ///         .with_prerequisite(Prerequisite::skill("scan")),
    /// ])
    /// .unwrap();
    ///
    /// let depths = graph.depths();
    /// assert_eq!(depths[&SkillId::from_str("core")], 0);
    /// assert_eq!(depths[&SkillId::from_str("scan")], 1);
    /// assert_eq!(depths[&SkillId::from_str("map")], 2);
    /// ```
    pub fn depths(&self) -> HashMap<SkillId, usize> {
        let mut memo = HashMap::with_capacity(self.skills.len());
        for skill in &self.skills {
            self.depth_of(&skill.id, &mut memo);
        }
        memo
    }

    fn depth_of(&self, skill_id: &SkillId, memo: &mut HashMap<SkillId, usize>) -> usize {
        if let Some(&depth) = memo.get(skill_id) {
            return depth;
        }
        // Recursion terminates: the graph was validated acyclic at load.
        let skill = &self.skills[self.index[skill_id]];
        let mut depth = 0;
        for prerequisite in &skill.prerequisites {
            if let Prerequisite::Skill { skill_id: required } = prerequisite {
                depth = depth.max(self.depth_of(required, memo) + 1);
            }
        }
        memo.insert(skill_id.clone(), depth);
        depth
    }

    /// Detect cycles over the prerequisite edges.
    ///
    /// Three-color depth-first search: unvisited nodes are white, nodes on
    /// the current DFS stack are gray, finished nodes are black. A back
    /// edge to a gray node signals a cycle, reported with the full path.
    fn detect_cycles(&self) -> Result<(), ValidationError> {
        // `visited` holds gray and black nodes; `gray` only the DFS stack.
        let mut visited = HashSet::new();
        let mut gray = HashSet::new();

        for node_idx in self.graph.node_indices() {
            if !visited.contains(&node_idx) {
                let mut path = Vec::new();
                if let Some(cycle) =
                    self.dfs_cycle_detect(node_idx, &mut visited, &mut gray, &mut path)
                {
                    return Err(cycle);
                }
            }
        }

        Ok(())
    }

    fn dfs_cycle_detect(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        gray: &mut HashSet<NodeIndex>,
        path: &mut Vec<SkillId>,
    ) -> Option<ValidationError> {
        visited.insert(node);
        gray.insert(node);
        path.push(self.graph[node].clone());

        for neighbor in self
            .graph
            .neighbors_directed(node, petgraph::Direction::Outgoing)
        {
            if !visited.contains(&neighbor) {
                if let Some(cycle) = self.dfs_cycle_detect(neighbor, visited, gray, path) {
                    return Some(cycle);
                }
            } else if gray.contains(&neighbor) {
                // Back edge to a gray node: extract the cycle portion of the path.
                let neighbor_id = self.graph[neighbor].clone();
                let cycle_start = path.iter().position(|id| id == &neighbor_id);
                let mut cycle: Vec<SkillId> = match cycle_start {
                    Some(start) => path[start..].to_vec(),
                    None => vec![self.graph[node].clone()],
                };
                cycle.push(neighbor_id);
                return Some(ValidationError::Cycle { path: cycle });
            }
        }

        gray.remove(&node);
        path.pop();
        None
    }
}
