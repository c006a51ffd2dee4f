//! End-to-end tests for the layout analysis pipeline.

use resume_layout::analysis::{analyze_formatting, check_spacing_consistency};
use resume_layout::{AnalysisConfig, DocumentAnalyzer, Glyph, LineReconstructor};

// Helper functions for building mock glyph streams

fn mock_glyph(text: &str, font: &str, size: f32, x: f32, y: f32, page: u32) -> Glyph {
    Glyph {
        text: text.to_string(),
        font_name: font.to_string(),
        size,
        x,
        y,
        page,
    }
}

fn mock_word(text: &str, font: &str, size: f32, x: f32, y: f32, page: u32) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(i, c)| mock_glyph(&c.to_string(), font, size, x + i as f32 * 7.0, y, page))
        .collect()
}

#[test]
fn test_bullet_percentage_scenario() {
    // 10 lines, 8 of them bullets
    let mut glyphs = Vec::new();
    for i in 0..8 {
        glyphs.extend(mock_word(
            "- item",
            "Calibri",
            11.0,
            90.0,
            100.0 + i as f32 * 20.0,
            1,
        ));
    }
    glyphs.extend(mock_word("Summary", "Calibri", 11.0, 72.0, 300.0, 1));
    glyphs.extend(mock_word("Footer", "Calibri", 11.0, 72.0, 320.0, 1));

    let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
    assert_eq!(lines.len(), 10);

    let stats = analyze_formatting(&lines, &glyphs);
    assert_eq!(stats.bullet_count, 8);
    assert_eq!(stats.bullet_percentage, 80.0);
}

#[test]
fn test_font_variety_scenario() {
    // Arial-Bold and ARIAL are one family; 12.04 rounds to 12.0
    let glyphs = vec![
        mock_glyph("a", "Arial-Bold", 12.0, 0.0, 100.0, 1),
        mock_glyph("b", "Arial-Bold", 12.0, 7.0, 100.0, 1),
        mock_glyph("c", "Arial-Bold", 12.0, 14.0, 100.0, 1),
        mock_glyph("d", "ARIAL", 12.04, 21.0, 100.0, 1),
        mock_glyph("e", "ARIAL", 12.04, 28.0, 100.0, 1),
    ];

    let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
    let stats = analyze_formatting(&lines, &glyphs);
    assert_eq!(stats.font_variations, 1);
    assert_eq!(stats.unique_font_names, 1);
    assert_eq!(stats.unique_font_sizes, 1);
    assert_eq!(stats.all_fonts_and_sizes[0].font, "arial");
    assert_eq!(stats.all_fonts_and_sizes[0].size, 12.0);
}

#[test]
fn test_two_line_spacing_scenario() {
    let mut glyphs = mock_word("First", "Arial", 11.0, 72.0, 100.0, 1);
    glyphs.extend(mock_word("Second", "Arial", 11.0, 72.0, 118.0, 1));

    let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
    let spacing = check_spacing_consistency(&lines);
    assert_eq!(spacing.avg_spacing, Some(18.0));
    assert_eq!(spacing.min_spacing, Some(18.0));
    assert_eq!(spacing.max_spacing, Some(18.0));
}

#[test]
fn test_one_line_spacing_scenario() {
    let glyphs = mock_word("Only", "Arial", 11.0, 72.0, 100.0, 1);

    let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
    let spacing = check_spacing_consistency(&lines);
    assert!(spacing.avg_spacing.is_none());
    assert!(spacing.min_spacing.is_none());
    assert!(spacing.max_spacing.is_none());
    assert!(spacing.messages[0].contains("Not enough lines"));
}

#[test]
fn test_uniform_gaps_are_consistent() {
    let mut glyphs = Vec::new();
    for i in 0..6 {
        glyphs.extend(mock_word(
            "Body text line",
            "Arial",
            11.0,
            72.0,
            100.0 + i as f32 * 14.0,
            1,
        ));
    }

    let lines = LineReconstructor::new(2.0).reconstruct(&glyphs).unwrap();
    let spacing = check_spacing_consistency(&lines);
    assert_eq!(spacing.avg_spacing, spacing.min_spacing);
    assert_eq!(spacing.min_spacing, spacing.max_spacing);
    assert!(spacing
        .messages
        .iter()
        .any(|m| m == "Vertical spacing is consistent."));
}

#[test]
fn test_full_report_on_small_resume() {
    let mut glyphs = Vec::new();
    glyphs.extend(mock_word("EDUCATION", "Georgia-Bold", 14.0, 72.0, 90.0, 1));
    glyphs.extend(mock_word("BSc Computer Science", "Georgia", 11.0, 72.0, 110.0, 1));
    glyphs.extend(mock_word("EXPERIENCE", "Georgia-Bold", 14.0, 72.0, 140.0, 1));
    glyphs.extend(mock_word("- Built data pipelines", "Georgia", 11.0, 90.0, 160.0, 1));
    glyphs.extend(mock_word("- Led code reviews", "Georgia", 11.0, 90.0, 174.0, 1));

    let report = DocumentAnalyzer::new(AnalysisConfig::default())
        .analyze(&glyphs)
        .unwrap();

    assert_eq!(report.formatting.total_lines, 5);
    assert_eq!(report.formatting.bullet_count, 2);
    assert_eq!(report.formatting.bullet_percentage, 40.0);
    // georgia at 14.0 and 11.0
    assert_eq!(report.formatting.font_variations, 2);
    assert_eq!(report.formatting.unique_font_names, 1);

    let heading_bucket = &report.sections.groups["Section Heading"];
    assert_eq!(heading_bucket.num_lines, 2);

    let grouped_total: usize = report.sections.groups.values().map(|g| g.num_lines).sum();
    assert_eq!(grouped_total, 5);
}

#[test]
fn test_malformed_glyph_fails_document() {
    let mut glyphs = mock_word("Fine", "Arial", 11.0, 72.0, 100.0, 1);
    glyphs.push(mock_glyph("x", "Arial", f32::NAN, 0.0, 120.0, 1));

    let result = DocumentAnalyzer::new(AnalysisConfig::default()).analyze(&glyphs);
    assert!(result.is_err());
    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("Malformed glyph"));
}

#[test]
fn test_empty_document_is_not_an_error() {
    let report = DocumentAnalyzer::new(AnalysisConfig::default())
        .analyze(&[])
        .unwrap();
    assert_eq!(report.formatting.total_lines, 0);
    assert_eq!(report.formatting.bullet_percentage, 0.0);
    assert!(report.spacing.avg_spacing.is_none());
}
