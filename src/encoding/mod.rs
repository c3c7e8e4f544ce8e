//! Decoding of the compact color and digit encodings.
//!
//! A display is described by two digit strings of at least 54 characters: one
//! indexing into the three-color palette, one giving the digit drawn on each
//! square. See [`EncodedSequence`] for the consumption order.

pub mod decoder;
pub mod error;

pub use decoder::EncodedSequence;
pub use error::{EncodingKind, LayoutError};
