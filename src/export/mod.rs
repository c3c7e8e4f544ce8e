//! Export functionality for stimulus layouts.
//!
//! Renderers here only consume a finished [`crate::models::StimulusLayout`];
//! they never influence layout assembly.

pub mod report;
pub mod svg;

pub use report::render_report;
pub use svg::render_svg;
