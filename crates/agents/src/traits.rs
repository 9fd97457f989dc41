//! The common agent interface.

use async_trait::async_trait;
use tandem_common::{AgentId, ExecutionState, Result};

/// A specialist agent the coordinator can schedule.
///
/// Agents read the query (and any prior outputs) from the execution state
/// and return a text payload. They never mutate the state themselves; the
/// coordinator records the result.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Which plan identifier this agent answers to.
    fn id(&self) -> AgentId;

    /// Human-readable agent name.
    fn name(&self) -> &str;

    /// Produce output for the current query.
    async fn execute(&self, state: &ExecutionState) -> Result<String>;
}
