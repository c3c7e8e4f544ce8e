//! ACVS Display Library
//!
//! This library computes the stimulus layout of an adaptive choice visual
//! search display: 54 colored, digit-labelled squares on three concentric
//! rings. It decodes the compact color and digit encodings, places every
//! square, and renders finished layouts as SVG or text.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod export;
pub mod geometry;
pub mod models;
pub mod services;

pub use encoding::LayoutError;
pub use models::{Square, StimulusLayout};
pub use services::generate_layout;
