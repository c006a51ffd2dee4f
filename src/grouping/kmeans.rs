//! Seeded k-means over line feature vectors.
//!
//! Thin wrapper around `linfa-clustering`. Callers must guard the degenerate
//! cases (empty input, fewer observations than clusters) before invoking
//! this; fitting on too few points is a programming error, not a runtime
//! condition to surface.

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use log::debug;
use ndarray::Array2;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::error::{Error, Result};

/// Cluster feature rows into `num_clusters` groups with a fixed seed.
///
/// Lloyd's algorithm with Euclidean distance; the same seed and input always
/// produce the same assignments.
///
/// # Errors
///
/// Returns [`Error::Clustering`] if the underlying fit fails.
pub fn cluster_features(features: Array2<f32>, num_clusters: usize, seed: u64) -> Result<Vec<usize>> {
    debug!(
        "running k-means: {} observations, {} clusters, seed {}",
        features.nrows(),
        num_clusters,
        seed
    );

    let rng = Xoshiro256Plus::seed_from_u64(seed);
    let dataset = DatasetBase::from(features);
    let model = KMeans::params_with_rng(num_clusters, rng)
        .max_n_iterations(300)
        .fit(&dataset)
        .map_err(|e| Error::Clustering(e.to_string()))?;

    let labels = model.predict(dataset.records());
    Ok(labels.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_separates_obvious_clusters() {
        let features = array![
            [11.0, 72.0, 0.0, 40.0],
            [11.0, 73.0, 0.0, 42.0],
            [11.0, 71.0, 0.0, 38.0],
            [14.0, 300.0, 1.0, 8.0],
            [14.0, 301.0, 1.0, 9.0],
            [14.0, 299.0, 1.0, 7.0],
        ];
        let labels = cluster_features(features, 2, 42).unwrap();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let features = array![
            [11.0, 72.0, 0.0, 40.0],
            [12.0, 90.0, 0.0, 30.0],
            [14.0, 300.0, 1.0, 8.0],
            [11.5, 75.0, 0.0, 44.0],
            [13.9, 295.0, 1.0, 10.0],
        ];
        let first = cluster_features(features.clone(), 2, 42).unwrap();
        let second = cluster_features(features, 2, 42).unwrap();
        assert_eq!(first, second);
    }
}
