//! Geometric line reconstruction from positioned glyphs.

pub mod glyph;
pub mod line_builder;

pub use glyph::{Glyph, Line};
pub use line_builder::LineReconstructor;
