//! Common types shared across Tandem crates.
//!
//! This crate provides the foundational pieces the coordinator and the
//! agents use to communicate: the agent identifier set, the per-query
//! plan, and the request-scoped execution state.

pub mod error;
pub mod plan;
pub mod state;

pub use error::{Result, TandemError};
pub use plan::{AgentId, Plan};
pub use state::{AgentResult, ExecutionState, LogEntry, RunMetadata};
