//! Formatting statistics and consistency reporting.

pub mod formatting;
pub mod spacing;

pub use formatting::{analyze_formatting, check_bullet_fonts, check_heading_styles, FontUsage, FormattingStats};
pub use spacing::{check_grouped_spacing, check_spacing_consistency, GroupedSpacingReport, MarginGroupSpacing, SpacingStats};
