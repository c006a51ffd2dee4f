//! Formatting statistics and style-consistency checks.
//!
//! Consumes reconstructed lines plus the raw glyph stream to produce global
//! formatting metrics (bullet usage, font/size variety) and targeted
//! consistency warnings (bullet style drift, heading style drift).
//!
//! Fonts that normalize to the symbolic family are excluded from variety and
//! consistency counting, but symbol glyphs still contribute to line text and
//! bullet detection upstream.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::fonts::{is_symbol_font, normalize_font_name};
use crate::layout::{Glyph, Line};

/// One distinct (normalized font, rounded size) pair observed in a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontUsage {
    /// Normalized font family name
    pub font: String,
    /// Font size rounded to one decimal place
    pub size: f32,
}

/// Global formatting metrics for one document.
#[derive(Debug, Clone, Serialize)]
pub struct FormattingStats {
    /// Total reconstructed line count
    pub total_lines: usize,
    /// Lines whose trimmed text starts with a bullet marker
    pub bullet_count: usize,
    /// `100 * bullet_count / total_lines`, 0 when there are no lines
    pub bullet_percentage: f32,
    /// Number of distinct (font, size) pairs, symbol fonts excluded
    pub font_variations: usize,
    /// Number of distinct font names within those pairs
    pub unique_font_names: usize,
    /// Number of distinct sizes within those pairs
    pub unique_font_sizes: usize,
    /// The pairs themselves, in first-encountered order
    pub all_fonts_and_sizes: Vec<FontUsage>,
}

/// Font size rounded to one decimal, as an integer key usable in sets.
fn round_size(size: f32) -> i64 {
    (size * 10.0).round() as i64
}

fn display_size(key: i64) -> f32 {
    key as f32 / 10.0
}

/// Compute global formatting statistics from lines and the raw glyph stream.
///
/// Bullet usage is counted per line; font variety is counted per glyph so
/// that style drift inside a line is still visible.
pub fn analyze_formatting(lines: &[Line], glyphs: &[Glyph]) -> FormattingStats {
    let bullet_count = lines.iter().filter(|l| l.is_bullet()).count();
    let total_lines = lines.len();
    let bullet_percentage = if total_lines == 0 {
        0.0
    } else {
        bullet_count as f32 / total_lines as f32 * 100.0
    };

    let mut usage: IndexSet<(String, i64)> = IndexSet::new();
    for glyph in glyphs {
        let font = normalize_font_name(&glyph.font_name);
        if is_symbol_font(&font) {
            continue;
        }
        usage.insert((font, round_size(glyph.size)));
    }

    let unique_font_names = usage.iter().map(|(f, _)| f).collect::<IndexSet<_>>().len();
    let unique_font_sizes = usage.iter().map(|(_, s)| s).collect::<IndexSet<_>>().len();

    FormattingStats {
        total_lines,
        bullet_count,
        bullet_percentage,
        font_variations: usage.len(),
        unique_font_names,
        unique_font_sizes,
        all_fonts_and_sizes: usage
            .into_iter()
            .map(|(font, size)| FontUsage {
                font,
                size: display_size(size),
            })
            .collect(),
    }
}

/// Check that bullet lines share a single font and size.
///
/// Collects the (font, rounded size) pairs used by the glyphs of every
/// bullet line, symbol fonts excluded. Returns no messages when the document
/// has no bullet lines.
pub fn check_bullet_fonts(lines: &[Line]) -> Vec<String> {
    let mut fonts: IndexSet<String> = IndexSet::new();
    let mut sizes: IndexSet<i64> = IndexSet::new();
    let mut saw_bullet = false;

    for line in lines.iter().filter(|l| l.is_bullet()) {
        saw_bullet = true;
        for glyph in &line.glyphs {
            let font = normalize_font_name(&glyph.font_name);
            if is_symbol_font(&font) {
                continue;
            }
            fonts.insert(font);
            sizes.insert(round_size(glyph.size));
        }
    }

    if !saw_bullet {
        return Vec::new();
    }
    if fonts.len() <= 1 && sizes.len() <= 1 {
        return vec!["Bullet formatting is consistent.".to_string()];
    }

    let font_list = fonts.iter().cloned().collect::<Vec<_>>().join(", ");
    let size_list = sizes
        .iter()
        .map(|&s| format!("{:.1}", display_size(s)))
        .collect::<Vec<_>>()
        .join(", ");
    vec![format!(
        "Inconsistent bullet formatting: fonts [{}], sizes [{}].",
        font_list, size_list
    )]
}

/// Check heading style consistency.
///
/// Headings are identified heuristically: fully-uppercase lines longer than
/// two characters. The most frequent (font, rounded size) pair among them is
/// the reference style (ties break toward the first-encountered pair), and
/// every heading that differs from it is reported individually with its page
/// and text. When no headings exist, that is reported explicitly.
pub fn check_heading_styles(lines: &[Line]) -> Vec<String> {
    let headings: Vec<&Line> = lines
        .iter()
        .filter(|l| l.is_all_caps() && l.text.chars().count() > 2)
        .collect();

    if headings.is_empty() {
        return vec!["No headings identified to check consistency.".to_string()];
    }

    let mut counts: IndexMap<(String, i64), usize> = IndexMap::new();
    for heading in &headings {
        *counts
            .entry((heading.font.clone(), round_size(heading.avg_size)))
            .or_insert(0) += 1;
    }

    let mut reference: Option<(&(String, i64), usize)> = None;
    for (style, &count) in &counts {
        if reference.map_or(true, |(_, n)| count > n) {
            reference = Some((style, count));
        }
    }
    let (ref_font, ref_size) = reference
        .map(|(style, _)| style.clone())
        .unwrap_or_default();

    let mut messages = Vec::new();
    for heading in &headings {
        let font = heading.font.clone();
        let size = round_size(heading.avg_size);
        if font != ref_font || size != ref_size {
            messages.push(format!(
                "Heading \"{}\" on page {} uses {} at {:.1}pt; expected {} at {:.1}pt.",
                heading.text,
                heading.page,
                font,
                display_size(size),
                ref_font,
                display_size(ref_size),
            ));
        }
    }
    messages
}
