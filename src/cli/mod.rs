//! CLI command handlers.
//!
//! This module provides headless, scriptable access to layout generation and
//! rendering for experiment pipelines and testing.

pub mod common;
pub mod config;
pub mod display;
pub mod generate;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use display::DisplayArgs;
pub use generate::GenerateArgs;
pub use render::RenderArgs;
