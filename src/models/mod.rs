//! Data models for stimulus displays.
//!
//! This module contains the plain data structures shared by the decoder, the
//! layout assembler and the renderers. Models are independent of any
//! rendering surface.

pub mod color_palette;
pub mod rgb;
pub mod square;
pub mod stimulus_layout;

// Re-export all model types
pub use color_palette::{ColorPalette, PaletteColor, PALETTE_SIZE};
pub use rgb::RgbColor;
pub use square::{classify, Classification, Square, TARGET_DIGITS};
pub use stimulus_layout::StimulusLayout;
