//! Service layer composing the pure building blocks.
//!
//! Services combine decoding and geometry into the operations the CLI and
//! renderers call.

pub mod layout;

pub use layout::{assemble, generate_layout};
