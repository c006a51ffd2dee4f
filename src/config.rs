//! Configuration for layout analysis.
//!
//! All tunables live in one caller-owned struct with sensible defaults;
//! there is no process-wide mutable state anywhere in the library.

/// Layout analysis configuration.
///
/// Every threshold the pipeline consumes is a plain scalar with a default,
/// so `AnalysisConfig::default()` reproduces the reference behavior.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Vertical distance (same units as glyph coordinates) within which a
    /// glyph joins the current line during reconstruction.
    pub y_threshold: f32,

    /// Number of k-means centroids for the section grouping stage.
    pub num_clusters: usize,

    /// Seed for the clustering RNG; fixed for reproducible assignments.
    pub cluster_seed: u64,

    /// Relative font-size deviation threshold, as a fraction of the group
    /// mean (0.2 = 20%).
    pub font_deviation: f32,

    /// Absolute floor (in size units) a font-size deviation must also exceed.
    pub min_font_diff: f32,

    /// Absolute left-margin deviation threshold (in coordinate units).
    pub margin_deviation: f32,

    /// Absolute floor a margin deviation must also exceed. With the default
    /// settings this collapses to the same check as `margin_deviation`.
    pub min_margin_diff: f32,

    /// Fraction of deviating lines in a group above which a deviation
    /// message is emitted.
    pub deviation_reporting_threshold: f32,

    /// Tolerance for joining a line to an existing left-margin bucket in the
    /// grouped spacing check.
    pub margin_bucket_tolerance: f32,

    /// Relative gap-variation threshold for per-margin-bucket spacing checks.
    pub grouped_spacing_threshold: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisConfig {
    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self {
            y_threshold: 2.0,
            num_clusters: 3,
            cluster_seed: 42,
            font_deviation: 0.2,
            min_font_diff: 0.5,
            margin_deviation: 10.0,
            min_margin_diff: 10.0,
            deviation_reporting_threshold: 0.2,
            margin_bucket_tolerance: 5.0,
            grouped_spacing_threshold: 0.6,
        }
    }

    /// Set the line-grouping vertical threshold.
    pub fn with_y_threshold(mut self, value: f32) -> Self {
        self.y_threshold = value;
        self
    }

    /// Set the number of k-means clusters.
    pub fn with_num_clusters(mut self, value: usize) -> Self {
        self.num_clusters = value;
        self
    }

    /// Set the clustering RNG seed.
    pub fn with_cluster_seed(mut self, value: u64) -> Self {
        self.cluster_seed = value;
        self
    }

    /// Set the relative font-size deviation threshold.
    pub fn with_font_deviation(mut self, value: f32) -> Self {
        self.font_deviation = value;
        self
    }

    /// Set the absolute font-size deviation floor.
    pub fn with_min_font_diff(mut self, value: f32) -> Self {
        self.min_font_diff = value;
        self
    }

    /// Set the absolute left-margin deviation threshold.
    pub fn with_margin_deviation(mut self, value: f32) -> Self {
        self.margin_deviation = value;
        self
    }

    /// Set the absolute left-margin deviation floor.
    pub fn with_min_margin_diff(mut self, value: f32) -> Self {
        self.min_margin_diff = value;
        self
    }

    /// Set the deviating-fraction reporting threshold.
    pub fn with_deviation_reporting_threshold(mut self, value: f32) -> Self {
        self.deviation_reporting_threshold = value;
        self
    }

    /// Set the margin-bucketing tolerance for grouped spacing checks.
    pub fn with_margin_bucket_tolerance(mut self, value: f32) -> Self {
        self.margin_bucket_tolerance = value;
        self
    }

    /// Set the relative variation threshold for grouped spacing checks.
    pub fn with_grouped_spacing_threshold(mut self, value: f32) -> Self {
        self.grouped_spacing_threshold = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.y_threshold, 2.0);
        assert_eq!(config.num_clusters, 3);
        assert_eq!(config.cluster_seed, 42);
        assert_eq!(config.margin_bucket_tolerance, 5.0);
        assert_eq!(config.grouped_spacing_threshold, 0.6);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::new()
            .with_y_threshold(3.5)
            .with_num_clusters(4)
            .with_cluster_seed(7);
        assert_eq!(config.y_threshold, 3.5);
        assert_eq!(config.num_clusters, 4);
        assert_eq!(config.cluster_seed, 7);
    }
}
