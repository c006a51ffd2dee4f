//! Font name normalization.
//!
//! PDF producers emit many spellings for one font family: subset prefixes
//! (`ABCDEF+Calibri`), style suffixes (`Arial-BoldItalic`), foundry markers
//! (`TimesNewRomanPSMT`). Downstream consistency checks compare families,
//! not spellings, so every raw name is collapsed to a canonical form first.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Style and foundry markers stripped wherever they occur.
    static ref STYLE_MARKERS: Regex = Regex::new(r"(?i)Bold|Italic|Regular|MT").unwrap();
}

/// Normalized name of the symbolic/dingbat font family.
///
/// Glyphs in this family still participate in line reconstruction and bullet
/// detection; they are only excluded from font-variety and style-consistency
/// counting.
pub const SYMBOL_FONT: &str = "symbol";

/// Canonicalize a raw font identifier so that style variants of the same
/// family compare equal.
///
/// Steps, in order:
/// 1. Drop everything up to and including the last `+` (subset prefix).
/// 2. Strip the case-insensitive substrings `Bold`, `Italic`, `Regular`, `MT`.
/// 3. Remove hyphens and underscores.
/// 4. Trim whitespace and lowercase.
///
/// Never fails; the result may be empty for degenerate inputs.
///
/// # Examples
///
/// ```
/// use resume_layout::fonts::normalize_font_name;
///
/// assert_eq!(normalize_font_name("ABCDEF+Arial-BoldMT"), "arial");
/// assert_eq!(normalize_font_name("Arial-Bold"), normalize_font_name("ARIAL"));
/// ```
pub fn normalize_font_name(raw: &str) -> String {
    let base = match raw.rfind('+') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    };
    let stripped = STYLE_MARKERS.replace_all(base, "");
    stripped.replace(['-', '_'], "").trim().to_lowercase()
}

/// Whether a normalized font name is the symbolic/dingbat family.
pub fn is_symbol_font(normalized: &str) -> bool {
    normalized == SYMBOL_FONT
}
