//! Error types for the layout analysis library.

/// Result type alias for layout analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout analysis.
///
/// Empty inputs (no glyphs, no lines, no headings) are not errors; every
/// stage degrades to an explicit informational message instead. Errors are
/// reserved for contract violations by the document-decoding collaborator
/// and for clustering failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A glyph record carries a non-finite size or position.
    ///
    /// Malformed glyphs fail the whole per-document call; the library never
    /// guesses and never returns partially populated statistics.
    #[error("Malformed glyph on page {page}: {reason}")]
    MalformedGlyph {
        /// Page number of the offending glyph
        page: u32,
        /// Description of the malformation
        reason: String,
    },

    /// The k-means clustering routine failed to fit a model.
    #[error("Clustering failed: {0}")]
    Clustering(String),
}
