//! Core coordinator implementation.

use crate::config::CoordinatorConfig;
use crate::planner;
use crate::router::{next_step, Step};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tandem_agents::{Agent, AnalysisAgent, ResearchAgent, WritingAgent};
use tandem_common::{AgentId, AgentResult, ExecutionState, Plan, Result};
use tracing::{info, warn};

/// Section heading used when aggregating an agent's output.
fn section_heading(agent: AgentId) -> &'static str {
    match agent {
        AgentId::Research => "Research Findings:",
        AgentId::Analysis => "Analysis Results:",
        AgentId::Writing => "Generated Content:",
    }
}

/// The final report for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Unique run ID
    pub run_id: String,

    /// The query that was processed
    pub query: String,

    /// The derived plan
    pub plan: Plan,

    /// Per-step results, in plan order
    pub steps: Vec<AgentResult>,

    /// Aggregated final response
    pub output: String,

    /// Total wall-clock time for the run
    pub duration_ms: u64,
}

/// The coordinator that plans, routes, and aggregates.
///
/// Holds the registered agents and drives them strictly sequentially in
/// plan order. All state is request-scoped; the coordinator itself is
/// immutable and can be shared across requests.
pub struct Coordinator {
    config: CoordinatorConfig,
    agents: HashMap<AgentId, Arc<dyn Agent>>,
}

impl Coordinator {
    /// Create a coordinator with the default agent set registered.
    pub fn new(config: CoordinatorConfig) -> Self {
        info!("Initializing Tandem coordinator");

        let mut agents: HashMap<AgentId, Arc<dyn Agent>> = HashMap::new();
        agents.insert(AgentId::Research, Arc::new(ResearchAgent::new()));
        agents.insert(AgentId::Analysis, Arc::new(AnalysisAgent::new()));
        agents.insert(AgentId::Writing, Arc::new(WritingAgent::new()));

        Self { config, agents }
    }

    /// Replace the agent registered for an id. Used by tests to install
    /// mock agents.
    pub fn with_agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.agents.insert(agent.id(), agent);
        self
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Derive the plan for a query without running it.
    pub fn plan(&self, query: &str) -> Plan {
        planner::plan(query)
    }

    /// Process a query end-to-end: plan, route, execute, aggregate.
    pub async fn run(&self, query: &str) -> Result<RunReport> {
        let started = Instant::now();
        let plan = self.plan(query);

        info!(
            plan = ?plan.steps(),
            query_preview = %query.chars().take(50).collect::<String>(),
            "Starting pipeline run"
        );

        let mut state = ExecutionState::new(query, &plan);
        state.log("coordinator", format!("derived plan with {} steps", plan.len()));

        loop {
            match next_step(&mut state) {
                Step::Run(id) => self.execute_step(id, &mut state).await?,
                Step::Done => break,
            }
        }

        let output = self.aggregate(&state);
        state.log("coordinator", "aggregated final response");

        let report = RunReport {
            run_id: state.metadata().run_id.clone(),
            query: query.to_string(),
            plan,
            steps: state.take_results(),
            output,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            run_id = %report.run_id,
            steps = report.steps.len(),
            duration_ms = report.duration_ms,
            "Pipeline run completed"
        );

        Ok(report)
    }

    /// Execute one plan step and record its output.
    async fn execute_step(&self, id: AgentId, state: &mut ExecutionState) -> Result<()> {
        let step_start = Instant::now();

        let Some(agent) = self.agents.get(&id) else {
            // The default registry always covers the full set; degrade
            // rather than fail if an override removed one.
            warn!(agent = %id, "No agent registered for plan step");
            state.record(id, format!("No agent available for '{}'", id), 0);
            return Ok(());
        };

        info!(agent = %id, "Executing plan step");

        let output = agent.execute(state).await?;
        state.record(id, output, step_start.elapsed().as_millis() as u64);
        Ok(())
    }

    /// Join per-agent outputs, in plan order, into the final response.
    fn aggregate(&self, state: &ExecutionState) -> String {
        state
            .results()
            .iter()
            .map(|r| format!("{}\n{}", section_heading(r.agent), r.output))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
