//! Specialist agents for the Tandem pipeline.
//!
//! This crate provides the three agents the coordinator can schedule,
//! plus the simulated tools they are built on:
//!
//! - **Research Agent**: simulated web search over a canned topic table
//! - **Analysis Agent**: arithmetic evaluation and chart descriptions
//! - **Writing Agent**: style-templated content generation
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  AGENT SET                       │
//! ├──────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐     │
//! │  │ Research │   │ Analysis │   │ Writing  │     │
//! │  └────┬─────┘   └────┬─────┘   └────┬─────┘     │
//! │       ▼              ▼              ▼           │
//! │  [web_search]  [calculator]   [content gen]     │
//! │                [chart descr]                    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! No agent performs real I/O or network access; every tool is a pure
//! function over the query text and the execution state.

pub mod analysis;
pub mod research;
pub mod tools;
pub mod traits;
pub mod writing;

pub use analysis::AnalysisAgent;
pub use research::ResearchAgent;
pub use traits::Agent;
pub use writing::WritingAgent;
