//! Whole-document analysis pipeline.
//!
//! Runs line reconstruction, formatting statistics, consistency checks,
//! spacing analysis, and section grouping sequentially over one document's
//! glyph set. Every call owns its intermediate buffers, so unrelated
//! documents can be analyzed fully in parallel with no locking.

use log::debug;
use serde::Serialize;

use crate::analysis::{
    analyze_formatting, check_bullet_fonts, check_grouped_spacing, check_heading_styles,
    check_spacing_consistency, FormattingStats, GroupedSpacingReport, SpacingStats,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::grouping::{SectionGrouper, SectionGroups};
use crate::layout::{Glyph, LineReconstructor};

/// Complete analysis output for one document.
///
/// Plain data, serializable as nested string/number maps; the caller decides
/// the transport format.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Global formatting metrics
    pub formatting: FormattingStats,
    /// Heading, bullet, and spacing consistency messages, in check order
    pub consistency: Vec<String>,
    /// Global vertical spacing statistics
    pub spacing: SpacingStats,
    /// Vertical spacing statistics per left-margin group
    pub grouped_spacing: GroupedSpacingReport,
    /// Hybrid section grouping with deviation messages
    pub sections: SectionGroups,
}

/// Batch analyzer for one document at a time.
///
/// # Examples
///
/// ```
/// use resume_layout::{AnalysisConfig, DocumentAnalyzer, Glyph};
///
/// let glyphs: Vec<Glyph> = "EDUCATION"
///     .chars()
///     .enumerate()
///     .map(|(i, c)| Glyph {
///         text: c.to_string(),
///         font_name: "Arial-Bold".to_string(),
///         size: 14.0,
///         x: 72.0 + i as f32 * 8.0,
///         y: 90.0,
///         page: 1,
///     })
///     .collect();
///
/// let analyzer = DocumentAnalyzer::new(AnalysisConfig::default());
/// let report = analyzer.analyze(&glyphs).unwrap();
/// assert_eq!(report.formatting.total_lines, 1);
/// assert_eq!(report.sections.groups["Section Heading"].num_lines, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl DocumentAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze one document's glyph stream.
    ///
    /// Either returns a fully populated report or fails with a single
    /// descriptive error; partial reports are never produced.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::MalformedGlyph`](crate::error::Error::MalformedGlyph)
    /// from reconstruction and
    /// [`Error::Clustering`](crate::error::Error::Clustering) from grouping.
    pub fn analyze(&self, glyphs: &[Glyph]) -> Result<DocumentReport> {
        let reconstructor = LineReconstructor::new(self.config.y_threshold);
        let lines = reconstructor.reconstruct(glyphs)?;
        debug!("reconstructed {} lines from {} glyphs", lines.len(), glyphs.len());

        let formatting = analyze_formatting(&lines, glyphs);

        let mut consistency = check_heading_styles(&lines);
        consistency.extend(check_bullet_fonts(&lines));
        let spacing = check_spacing_consistency(&lines);
        consistency.extend(spacing.messages.iter().cloned());

        let grouped_spacing = check_grouped_spacing(
            &lines,
            self.config.margin_bucket_tolerance,
            self.config.grouped_spacing_threshold,
        );

        let sections = SectionGrouper::new(&self.config).group(&lines)?;

        Ok(DocumentReport {
            formatting,
            consistency,
            spacing,
            grouped_spacing,
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_word(text: &str, x: f32, y: f32, size: f32, page: u32) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, c)| Glyph {
                text: c.to_string(),
                font_name: "Arial".to_string(),
                size,
                x: x + i as f32 * 7.0,
                y,
                page,
            })
            .collect()
    }

    #[test]
    fn test_empty_document_yields_complete_report() {
        let report = DocumentAnalyzer::default().analyze(&[]).unwrap();
        assert_eq!(report.formatting.total_lines, 0);
        assert!(report.spacing.avg_spacing.is_none());
        assert!(report
            .consistency
            .iter()
            .any(|m| m.contains("No headings")));
        assert!(report.sections.groups.contains_key("Section Heading"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut glyphs = mock_word("EDUCATION", 72.0, 90.0, 14.0, 1);
        glyphs.extend(mock_word("BSc Computing", 72.0, 110.0, 11.0, 1));

        let report = DocumentAnalyzer::default().analyze(&glyphs).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["formatting"]["total_lines"].is_u64());
        assert!(json["sections"]["groups"]["Section Heading"]["num_lines"].is_u64());
        // Null aggregates stay null, not zero
        assert!(json["spacing"]["avg_spacing"].is_number());
    }

    #[test]
    fn test_malformed_glyph_fails_without_partial_report() {
        let mut glyphs = mock_word("Fine", 72.0, 90.0, 11.0, 1);
        glyphs.push(Glyph {
            text: "x".to_string(),
            font_name: "Arial".to_string(),
            size: 11.0,
            x: f32::INFINITY,
            y: 100.0,
            page: 1,
        });
        assert!(DocumentAnalyzer::default().analyze(&glyphs).is_err());
    }
}
