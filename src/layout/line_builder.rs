//! Line reconstruction from positioned glyphs.
//!
//! Glyphs arrive as an unordered stream with no delimiters; the only signal
//! for "same visual row" is vertical proximity. Per page, glyphs are sorted
//! by top coordinate and swept into line buffers anchored at the first glyph
//! of each row. A glyph whose top drifts beyond the threshold from the
//! anchor flushes the buffer and starts a new row.

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;
use crate::fonts::normalize_font_name;
use crate::layout::glyph::{Glyph, Line};

/// Groups a page's glyphs into reading-order lines.
///
/// # Examples
///
/// ```
/// use resume_layout::layout::{Glyph, LineReconstructor};
///
/// let glyphs = vec![
///     Glyph { text: "H".into(), font_name: "Arial".into(), size: 12.0, x: 0.0, y: 100.0, page: 1 },
///     Glyph { text: "i".into(), font_name: "Arial".into(), size: 12.0, x: 8.0, y: 100.5, page: 1 },
/// ];
/// let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].text, "Hi");
/// ```
#[derive(Debug, Clone)]
pub struct LineReconstructor {
    y_threshold: f32,
}

impl Default for LineReconstructor {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl LineReconstructor {
    /// Create a reconstructor with the given vertical grouping threshold.
    pub fn new(y_threshold: f32) -> Self {
        Self { y_threshold }
    }

    /// Reconstruct reading-order lines from a glyph stream.
    ///
    /// Glyphs are partitioned by page (pages keep their first-encountered
    /// order), sorted by top coordinate within each page, and swept into
    /// lines. A page with zero glyphs contributes zero lines.
    ///
    /// Symbol-font glyphs are included here like any other glyph; the
    /// symbol exclusion applies only to font-variety counting downstream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGlyph`](crate::error::Error::MalformedGlyph)
    /// if any glyph carries a non-finite size or position; no partial line
    /// list is produced.
    pub fn reconstruct(&self, glyphs: &[Glyph]) -> Result<Vec<Line>> {
        for glyph in glyphs {
            glyph.ensure_well_formed()?;
        }

        let mut pages: IndexMap<u32, Vec<&Glyph>> = IndexMap::new();
        for glyph in glyphs {
            pages.entry(glyph.page).or_default().push(glyph);
        }

        let mut lines = Vec::new();
        for (page, page_glyphs) in pages {
            let start = lines.len();
            self.reconstruct_page(page, page_glyphs, &mut lines);
            debug!(
                "page {}: grouped {} glyphs into {} lines",
                page,
                lines[start..].iter().map(Line::glyph_count).sum::<usize>(),
                lines.len() - start,
            );
        }
        Ok(lines)
    }

    /// Sweep one page's glyphs, appending finished lines to `out`.
    fn reconstruct_page(&self, page: u32, mut glyphs: Vec<&Glyph>, out: &mut Vec<Line>) {
        glyphs.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

        let mut buffer: Vec<&Glyph> = Vec::new();
        // Anchor: top coordinate of the line's first glyph. Deliberately not
        // updated as glyphs join, so a slow vertical drift still breaks the
        // line once it exceeds the threshold from the anchor.
        let mut last_top: Option<f32> = None;

        for glyph in glyphs {
            match last_top {
                Some(top) if (glyph.y - top).abs() >= self.y_threshold => {
                    out.push(flush_line(&buffer, top, page));
                    buffer.clear();
                    buffer.push(glyph);
                    last_top = Some(glyph.y);
                }
                Some(_) => buffer.push(glyph),
                None => {
                    buffer.push(glyph);
                    last_top = Some(glyph.y);
                }
            }
        }
        if let Some(top) = last_top {
            if !buffer.is_empty() {
                out.push(flush_line(&buffer, top, page));
            }
        }
    }
}

/// Turn a line buffer into a [`Line`]: sort by x for reading order, then
/// derive text, average size, dominant font, and left margin.
fn flush_line(buffer: &[&Glyph], top: f32, page: u32) -> Line {
    let mut ordered: Vec<Glyph> = buffer.iter().map(|g| (*g).clone()).collect();
    ordered.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let text: String = ordered.iter().map(|g| g.text.as_str()).collect();
    let avg_size = ordered.iter().map(|g| g.size).sum::<f32>() / ordered.len() as f32;
    let left = ordered
        .iter()
        .map(|g| g.x)
        .fold(f32::INFINITY, f32::min);
    let font = dominant_font(&ordered);

    Line {
        text: text.trim().to_string(),
        avg_size,
        font,
        top,
        left,
        page,
        glyphs: ordered,
    }
}

/// Most frequent normalized font among the glyphs; ties break toward the
/// first-encountered name in reading order.
fn dominant_font(glyphs: &[Glyph]) -> String {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for glyph in glyphs {
        *counts.entry(normalize_font_name(&glyph.font_name)).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, &count) in &counts {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string()).unwrap_or_default()
}
