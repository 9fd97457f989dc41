//! Request-scoped execution state for one pipeline run.

use crate::plan::{AgentId, Plan};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Output produced by a single agent step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    /// Agent that produced the output
    pub agent: AgentId,

    /// Text payload
    pub output: String,

    /// Elapsed wall-clock time for the step
    pub duration_ms: u64,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp (Unix millis)
    pub timestamp: u64,

    /// Component that acted ("coordinator" or an agent id)
    pub actor: String,

    /// What happened
    pub action: String,
}

/// Run-level metadata collected alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Unique run ID
    pub run_id: String,

    /// Start timestamp (Unix millis)
    pub started_at: u64,

    /// Agents that produced output, in execution order
    pub agents_used: Vec<AgentId>,

    /// Number of steps in the derived plan
    pub total_steps: usize,
}

/// Mutable state threaded through one pipeline run.
///
/// Holds the original query, the remaining plan steps, and the outputs
/// produced so far. Created when a query arrives and discarded once the
/// final response has been aggregated.
#[derive(Debug, Clone)]
pub struct ExecutionState {
    query: String,
    remaining: VecDeque<AgentId>,
    results: Vec<AgentResult>,
    log: Vec<LogEntry>,
    metadata: RunMetadata,
}

impl ExecutionState {
    pub fn new(query: impl Into<String>, plan: &Plan) -> Self {
        let metadata = RunMetadata {
            run_id: format!("run_{}", uuid::Uuid::new_v4()),
            started_at: now_millis(),
            agents_used: Vec::new(),
            total_steps: plan.len(),
        };

        Self {
            query: query.into(),
            remaining: plan.steps().iter().copied().collect(),
            results: Vec::new(),
            log: Vec::new(),
            metadata,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Pop the next plan step, if any. Called by the router.
    pub fn pop_step(&mut self) -> Option<AgentId> {
        self.remaining.pop_front()
    }

    /// Record an agent's output and log the step.
    pub fn record(&mut self, agent: AgentId, output: impl Into<String>, duration_ms: u64) {
        let output = output.into();
        self.log(agent.as_str(), format!("produced {} bytes", output.len()));

        if !self.metadata.agents_used.contains(&agent) {
            self.metadata.agents_used.push(agent);
        }

        self.results.push(AgentResult {
            agent,
            output,
            duration_ms,
        });
    }

    /// Append an entry to the conversation log.
    pub fn log(&mut self, actor: impl Into<String>, action: impl Into<String>) {
        self.log.push(LogEntry {
            timestamp: now_millis(),
            actor: actor.into(),
            action: action.into(),
        });
    }

    /// Output of a previously executed agent, if it has run.
    pub fn output_for(&self, agent: AgentId) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.agent == agent)
            .map(|r| r.output.as_str())
    }

    /// All results so far, in execution (plan) order.
    pub fn results(&self) -> &[AgentResult] {
        &self.results
    }

    pub fn take_results(self) -> Vec<AgentResult> {
        self.results
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }
}
