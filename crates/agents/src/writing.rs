//! Writing agent - style-templated content creation.

use crate::tools::content::{self, Style};
use crate::traits::Agent;
use async_trait::async_trait;
use tandem_common::{AgentId, ExecutionState, Result};
use tracing::info;

/// Writing agent backed by the content generation tool.
pub struct WritingAgent {
    name: String,
}

impl WritingAgent {
    pub fn new() -> Self {
        Self {
            name: "Writing Agent".into(),
        }
    }
}

impl Default for WritingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for WritingAgent {
    fn id(&self) -> AgentId {
        AgentId::Writing
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, state: &ExecutionState) -> Result<String> {
        let query = state.query();
        let style = Style::from_query(query);

        info!(agent = %self.id(), ?style, "Generating content");

        let mut output = content::generate(query, style);

        // Fold in research findings when the research agent ran earlier
        // in the plan.
        if let Some(findings) = state.output_for(AgentId::Research) {
            output.push_str(&format!("\n\nBased on research findings: {}", findings));
        }

        Ok(output)
    }
}
