//! Feature extraction for line clustering.
//!
//! Each line is reduced to a 4-dimensional vector: average font size, left
//! margin, uppercase flag, and text length. The dimensions are deliberately
//! left unscaled to reproduce the reference behavior, which means Euclidean
//! distance is dominated by the largest-magnitude feature (the left margin).

use ndarray::Array2;

use crate::layout::glyph::is_all_caps;
use crate::layout::Line;

/// Number of features per line.
pub const FEATURE_DIM: usize = 4;

/// Build the (n_lines × 4) feature matrix for clustering.
///
/// Row layout:
/// - Column 0: average font size
/// - Column 1: left margin
/// - Column 2: uppercase flag (0.0 or 1.0)
/// - Column 3: text length in characters
pub fn extract_features(lines: &[&Line]) -> Array2<f32> {
    let mut features = Array2::zeros((lines.len(), FEATURE_DIM));
    for (i, line) in lines.iter().enumerate() {
        features[[i, 0]] = line.avg_size;
        features[[i, 1]] = line.left;
        features[[i, 2]] = if is_all_caps(&line.text) { 1.0 } else { 0.0 };
        features[[i, 3]] = line.text.chars().count() as f32;
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_line(text: &str, size: f32, left: f32) -> Line {
        Line {
            glyphs: vec![],
            text: text.to_string(),
            avg_size: size,
            font: "arial".to_string(),
            top: 0.0,
            left,
            page: 1,
        }
    }

    #[test]
    fn test_feature_matrix_shape_and_values() {
        let a = mock_line("SKILLS", 14.0, 72.0);
        let b = mock_line("Led a team of four", 11.0, 90.0);
        let lines = vec![&a, &b];

        let features = extract_features(&lines);
        assert_eq!(features.shape(), &[2, 4]);

        assert_eq!(features[[0, 0]], 14.0);
        assert_eq!(features[[0, 1]], 72.0);
        assert_eq!(features[[0, 2]], 1.0);
        assert_eq!(features[[0, 3]], 6.0);

        assert_eq!(features[[1, 2]], 0.0);
        assert_eq!(features[[1, 3]], 18.0);
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<&Line> = vec![];
        let features = extract_features(&lines);
        assert_eq!(features.shape(), &[0, 4]);
    }
}
