//! Plan-and-route coordinator for Tandem.
//!
//! The coordinator is the central piece of the pipeline:
//! 1. Derives an ordered plan of agents from keyword cues in the query
//! 2. Drives the agents sequentially via the router
//! 3. Aggregates per-agent outputs into the final response
//!
//! # Architecture
//!
//! ```text
//! Query
//!   │
//!   ▼
//! ┌─────────────────┐
//! │   Coordinator   │ ◄── keyword planner
//! │   (this crate)  │
//! └────────┬────────┘
//!          │ router picks next step
//!    ┌─────┴─────┬──────────┐
//!    ▼           ▼          ▼
//! [Research] [Analysis] [Writing]
//!    └─────┬─────┴──────────┘
//!          ▼
//!     aggregate → final response
//! ```
//!
//! A single-agent "simple" mode is also available for chat-style
//! interactions that do not need the full pipeline.

pub mod config;
pub mod coordinator;
pub mod planner;
pub mod router;
pub mod simple;

pub use config::{CoordinatorConfig, RunMode};
pub use coordinator::{Coordinator, RunReport};
pub use router::{next_step, Step};
pub use simple::SimpleResponder;
