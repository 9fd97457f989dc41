//! Keyword-based plan derivation.
//!
//! This is keyword matching, not a real planner: the query is scanned
//! for cue substrings and the matching agents are returned in a fixed
//! priority order (research, analysis, writing). A query matching
//! nothing gets the default research-then-writing plan.

use tandem_common::{AgentId, Plan};
use tracing::debug;

const RESEARCH_KEYWORDS: &[&str] = &[
    "what is",
    "tell me about",
    "research",
    "find information",
    "explain",
];

const ANALYSIS_KEYWORDS: &[&str] = &[
    "calculate",
    "analyze",
    "compare",
    "statistics",
    "average",
    "sum",
    "+",
    "-",
    "*",
    "/",
];

const WRITING_KEYWORDS: &[&str] = &[
    "write",
    "create",
    "generate",
    "summarize",
    "summary",
    "report",
    "document",
];

fn matches_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Derive the plan for a query.
///
/// The returned plan is never empty and only ever contains agents from
/// the fixed set, in priority order.
pub fn plan(query: &str) -> Plan {
    let lower = query.to_lowercase();
    let mut steps = Vec::new();

    if matches_any(&lower, RESEARCH_KEYWORDS) {
        steps.push(AgentId::Research);
    }
    if matches_any(&lower, ANALYSIS_KEYWORDS) {
        steps.push(AgentId::Analysis);
    }
    if matches_any(&lower, WRITING_KEYWORDS) {
        steps.push(AgentId::Writing);
    }

    if steps.is_empty() {
        steps = vec![AgentId::Research, AgentId::Writing];
    }

    debug!(?steps, "Derived plan");
    Plan::new(steps)
}
