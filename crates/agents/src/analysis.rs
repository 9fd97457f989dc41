//! Analysis agent - arithmetic evaluation and chart descriptions.

use crate::tools::{calculator, chart};
use crate::traits::Agent;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tandem_common::{AgentId, ExecutionState, Result};
use tracing::info;

/// Candidate spans that look like arithmetic expressions.
static MATH_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9+\-*/().\s]+").expect("math span regex is valid"));

const VIZ_KEYWORDS: &[&str] = &["chart", "graph", "visualize", "plot"];

const DEFAULT_ANALYSIS: &str = "Analysis completed: data patterns and insights identified.";

/// Analysis agent backed by the calculator and chart tools.
pub struct AnalysisAgent {
    name: String,
}

impl AnalysisAgent {
    pub fn new() -> Self {
        Self {
            name: "Analysis Agent".into(),
        }
    }

    /// Extract spans of the query that contain at least one operator and
    /// one digit, i.e. plausible arithmetic expressions.
    fn expression_candidates(query: &str) -> Vec<&str> {
        MATH_SPAN_RE
            .find_iter(query)
            .map(|m| m.as_str().trim())
            .filter(|span| {
                span.chars().any(|c| c.is_ascii_digit())
                    && span.chars().any(|c| "+-*/".contains(c))
            })
            .collect()
    }
}

impl Default for AnalysisAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for AnalysisAgent {
    fn id(&self) -> AgentId {
        AgentId::Analysis
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, state: &ExecutionState) -> Result<String> {
        let query = state.query();
        let lower = query.to_lowercase();
        let mut parts = Vec::new();

        for candidate in Self::expression_candidates(query) {
            parts.push(calculator::calculate(candidate));
        }

        // Statistical requests carry their numbers outside operator spans
        // ("average of 10 and 20" has no operators), so check separately.
        if parts.is_empty()
            && (lower.contains("average") || lower.contains("mean") || lower.contains("sum"))
        {
            let result = calculator::calculate(query);
            if result != calculator::CALCULATION_ERROR {
                parts.push(result);
            }
        }

        if VIZ_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            parts.push(chart::describe_chart(query));
        }

        if parts.is_empty() {
            parts.push(DEFAULT_ANALYSIS.to_string());
        }

        info!(agent = %self.id(), findings = parts.len(), "Analysis complete");
        Ok(parts.join(" | "))
    }
}
