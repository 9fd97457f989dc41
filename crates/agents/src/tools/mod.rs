//! Simulated tools backing the agents.
//!
//! Each tool is a pure function: no network, no filesystem, no real
//! computation beyond basic arithmetic.

pub mod calculator;
pub mod chart;
pub mod content;
pub mod search;
