//! Research agent - simulated web search and knowledge gathering.

use crate::tools::search;
use crate::traits::Agent;
use async_trait::async_trait;
use tandem_common::{AgentId, ExecutionState, Result};
use tracing::info;

/// Research agent backed by the simulated web search tool.
pub struct ResearchAgent {
    name: String,
}

impl ResearchAgent {
    pub fn new() -> Self {
        Self {
            name: "Research Agent".into(),
        }
    }
}

impl Default for ResearchAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for ResearchAgent {
    fn id(&self) -> AgentId {
        AgentId::Research
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, state: &ExecutionState) -> Result<String> {
        info!(agent = %self.id(), "Gathering information");
        Ok(search::web_search(state.query()))
    }
}
