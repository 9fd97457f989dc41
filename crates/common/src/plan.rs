//! The agent identifier set and the per-query plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the fixed set of specialist agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    Research,
    Analysis,
    Writing,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::Research => "research",
            AgentId::Analysis => "analysis",
            AgentId::Writing => "writing",
        }
    }

    /// All agent ids in their fixed priority order.
    pub fn all() -> [AgentId; 3] {
        [AgentId::Research, AgentId::Analysis, AgentId::Writing]
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of agents to execute for one query.
///
/// Derived once per query by the coordinator's planner and never mutated
/// afterwards. The planner guarantees a plan is non-empty by substituting
/// a default when no keyword matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    steps: Vec<AgentId>,
}

impl Plan {
    pub fn new(steps: Vec<AgentId>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[AgentId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.steps.contains(&agent)
    }

    /// Position of an agent within the plan, if present.
    pub fn position(&self, agent: AgentId) -> Option<usize> {
        self.steps.iter().position(|a| *a == agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_display() {
        assert_eq!(AgentId::Research.to_string(), "research");
        assert_eq!(AgentId::Analysis.to_string(), "analysis");
        assert_eq!(AgentId::Writing.to_string(), "writing");
    }

    #[test]
    fn test_agent_id_serialization() {
        let json = serde_json::to_string(&AgentId::Analysis).unwrap();
        assert_eq!(json, "\"analysis\"");
        let parsed: AgentId = serde_json::from_str("\"writing\"").unwrap();
        assert_eq!(parsed, AgentId::Writing);
    }

    #[test]
    fn test_plan_position_reflects_order() {
        let plan = Plan::new(vec![AgentId::Research, AgentId::Writing]);
        assert_eq!(plan.position(AgentId::Research), Some(0));
        assert_eq!(plan.position(AgentId::Writing), Some(1));
        assert_eq!(plan.position(AgentId::Analysis), None);
    }

    #[test]
    fn test_plan_contains() {
        let plan = Plan::new(vec![AgentId::Analysis]);
        assert!(plan.contains(AgentId::Analysis));
        assert!(!plan.contains(AgentId::Research));
        assert_eq!(plan.len(), 1);
    }
}
