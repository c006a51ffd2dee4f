//! # resume_layout
//!
//! Layout analysis for resume documents: turns an unordered stream of
//! positioned glyphs into reading-order lines, then audits the result for
//! formatting consistency and groups lines into semantic regions.
//!
//! ## Pipeline
//!
//! 1. **Font normalization** ([`fonts`]): canonicalizes font identifiers so
//!    style variants of one family compare equal.
//! 2. **Line reconstruction** ([`layout`]): groups a page's glyphs into
//!    lines by vertical proximity and derives per-line attributes.
//! 3. **Formatting statistics** ([`analysis`]): bullet usage, font/size
//!    variety, bullet and heading style consistency, vertical spacing.
//! 4. **Hybrid section grouping** ([`grouping`]): exact vocabulary
//!    pre-classification plus seeded k-means over a 4-D feature space, with
//!    per-group deviation reporting.
//!
//! [`DocumentAnalyzer`] runs the whole pipeline and returns one
//! serializable [`DocumentReport`].
//!
//! ## Quick start
//!
//! ```
//! use resume_layout::{AnalysisConfig, DocumentAnalyzer, Glyph};
//!
//! let glyphs = vec![
//!     Glyph { text: "H".into(), font_name: "Arial".into(), size: 11.0, x: 72.0, y: 100.0, page: 1 },
//!     Glyph { text: "i".into(), font_name: "Arial".into(), size: 11.0, x: 79.0, y: 100.3, page: 1 },
//! ];
//!
//! let analyzer = DocumentAnalyzer::new(AnalysisConfig::default());
//! let report = analyzer.analyze(&glyphs).unwrap();
//! assert_eq!(report.formatting.total_lines, 1);
//! ```
//!
//! Processing is single-threaded and batch-oriented; every call takes its
//! input explicitly and returns a fresh report, so unrelated documents can
//! be analyzed in parallel without locking.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Font name canonicalization
pub mod fonts;

// Line reconstruction
pub mod layout;

// Formatting statistics and consistency checks
pub mod analysis;

// Hybrid section grouping
pub mod grouping;

// Whole-document pipeline
pub mod analyzer;

pub use analyzer::{DocumentAnalyzer, DocumentReport};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use layout::{Glyph, Line, LineReconstructor};
