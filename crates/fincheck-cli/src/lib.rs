//! CLI library components for the registry checker.

pub mod columns;
pub mod logging;
pub mod render;
