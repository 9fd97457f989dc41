//! Step selection over the execution state.

use tandem_common::{AgentId, ExecutionState};

/// The router's verdict for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Execute this agent next
    Run(AgentId),
    /// Plan exhausted
    Done,
}

/// Pop the next plan entry from the state, or signal completion.
///
/// Deterministic and stateless beyond the state argument; the only
/// effect is consuming one remaining plan step.
pub fn next_step(state: &mut ExecutionState) -> Step {
    match state.pop_step() {
        Some(agent) => Step::Run(agent),
        None => Step::Done,
    }
}
