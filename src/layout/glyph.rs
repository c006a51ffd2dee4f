//! Glyph and line representations for layout analysis.
//!
//! A [`Glyph`] is the atomic unit of layout input: one rendered character
//! with font, size, and position metadata, produced by a document-decoding
//! collaborator. A [`Line`] is a reading-order run of glyphs judged to be on
//! the same visual row, with aggregate attributes derived at construction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One positioned character on one page.
///
/// Immutable input record; the library sorts its own copies and never
/// mutates the caller's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Character text (usually a single character; ligatures may carry more)
    pub text: String,
    /// Raw font identifier as reported by the decoder
    pub font_name: String,
    /// Font size in points
    pub size: f32,
    /// X coordinate of the glyph's left edge
    pub x: f32,
    /// Y coordinate of the glyph's top edge
    pub y: f32,
    /// Page number the glyph was rendered on
    pub page: u32,
}

impl Glyph {
    /// Verify the numeric fields are finite.
    ///
    /// A non-finite size or position is a contract violation by the
    /// document-decoding collaborator and fails the whole per-document call.
    pub(crate) fn ensure_well_formed(&self) -> Result<()> {
        if !self.size.is_finite() {
            return Err(Error::MalformedGlyph {
                page: self.page,
                reason: format!("non-finite font size for glyph {:?}", self.text),
            });
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(Error::MalformedGlyph {
                page: self.page,
                reason: format!("non-finite position for glyph {:?}", self.text),
            });
        }
        Ok(())
    }
}

/// A reconstructed row of text.
///
/// Owns its glyphs in reading order (sorted by x). Constructed once per page
/// scan by [`LineReconstructor`](crate::layout::LineReconstructor) and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Line {
    /// Member glyphs, left to right
    pub glyphs: Vec<Glyph>,
    /// Concatenated glyph text, trimmed
    pub text: String,
    /// Average font size across the member glyphs
    pub avg_size: f32,
    /// Dominant normalized font name (mode, first-encountered tie-break)
    pub font: String,
    /// Vertical position: top coordinate of the first glyph encountered
    /// while grouping
    pub top: f32,
    /// Left margin: minimum x across the member glyphs
    pub left: f32,
    /// Page number
    pub page: u32,
}

impl Line {
    /// Number of glyphs the line was built from.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the line text is fully uppercase.
    ///
    /// True when the text contains at least one cased character and no
    /// lowercase character, mirroring the heading heuristic used by the
    /// formatting and grouping engines.
    pub fn is_all_caps(&self) -> bool {
        is_all_caps(&self.text)
    }

    /// Whether the trimmed text starts with a bullet marker (`•`, `-`, `*`).
    pub fn is_bullet(&self) -> bool {
        self.text.trim().starts_with(['•', '-', '*'])
    }
}

/// Fully-uppercase check: at least one cased character, none lowercase.
pub(crate) fn is_all_caps(text: &str) -> bool {
    let mut has_cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_line(text: &str) -> Line {
        Line {
            glyphs: vec![],
            text: text.to_string(),
            avg_size: 12.0,
            font: "arial".to_string(),
            top: 0.0,
            left: 0.0,
            page: 1,
        }
    }

    #[test]
    fn test_is_all_caps() {
        assert!(mock_line("EDUCATION").is_all_caps());
        assert!(mock_line("WORK HISTORY").is_all_caps());
        assert!(!mock_line("Education").is_all_caps());
        assert!(!mock_line("2019 - 2023").is_all_caps());
        assert!(!mock_line("").is_all_caps());
    }

    #[test]
    fn test_is_bullet() {
        assert!(mock_line("• Led a team of four").is_bullet());
        assert!(mock_line("- Shipped v2").is_bullet());
        assert!(mock_line("* Rust, Python").is_bullet());
        assert!(!mock_line("Led a team of four").is_bullet());
    }

    #[test]
    fn test_malformed_glyph_detected() {
        let glyph = Glyph {
            text: "a".to_string(),
            font_name: "Arial".to_string(),
            size: f32::NAN,
            x: 0.0,
            y: 0.0,
            page: 1,
        };
        assert!(glyph.ensure_well_formed().is_err());
    }
}
