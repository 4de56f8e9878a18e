//! CLI library components for the composition converter.

pub mod logging;
pub mod pipeline;
