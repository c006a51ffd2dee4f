//! Vertical spacing consistency checks.
//!
//! Two views of the same signal: a global pass over all lines sorted by top
//! coordinate, and a per-margin-group pass that buckets lines by left margin
//! first, so indented bullet blocks are judged against their own rhythm
//! rather than against section headings.

use log::debug;
use serde::Serialize;

use crate::layout::Line;

/// Gap statistics plus the messages derived from them.
///
/// All three aggregates are `None` when the document has fewer than two
/// lines; the message list says so explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct SpacingStats {
    /// Mean gap between consecutive lines
    pub avg_spacing: Option<f32>,
    /// Smallest gap
    pub min_spacing: Option<f32>,
    /// Largest gap
    pub max_spacing: Option<f32>,
    /// Human-readable findings, in emission order
    pub messages: Vec<String>,
}

/// Gap statistics for one left-margin bucket.
#[derive(Debug, Clone, Serialize)]
pub struct MarginGroupSpacing {
    /// Representative left margin (the founding line's margin)
    pub margin: f32,
    /// Lines in the bucket
    pub line_count: usize,
    /// Mean gap, `None` for buckets with fewer than two lines
    pub avg_spacing: Option<f32>,
    /// Smallest gap
    pub min_spacing: Option<f32>,
    /// Largest gap
    pub max_spacing: Option<f32>,
}

/// Margin-grouped spacing report.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedSpacingReport {
    /// Mean gap across every bucket's gaps, `None` when no bucket has two lines
    pub overall_avg_spacing: Option<f32>,
    /// Per-bucket statistics, in bucket creation order
    pub groups: Vec<MarginGroupSpacing>,
    /// Lead summary followed by per-bucket variation flags
    pub messages: Vec<String>,
}

/// Consecutive gaps between lines sorted by top coordinate.
fn vertical_gaps(lines: &mut Vec<&Line>) -> Vec<f32> {
    lines.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap_or(std::cmp::Ordering::Equal));
    lines
        .windows(2)
        .map(|pair| pair[1].top - pair[0].top)
        .collect()
}

fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Check vertical spacing between consecutive lines across the document.
///
/// Gaps are measured after sorting all lines by top coordinate. When the
/// spread `max - min` exceeds half the mean gap, the spacing is flagged as
/// varying significantly.
pub fn check_spacing_consistency(lines: &[Line]) -> SpacingStats {
    if lines.len() < 2 {
        return SpacingStats {
            avg_spacing: None,
            min_spacing: None,
            max_spacing: None,
            messages: vec!["Not enough lines to analyze vertical spacing.".to_string()],
        };
    }

    let mut sorted: Vec<&Line> = lines.iter().collect();
    let gaps = vertical_gaps(&mut sorted);
    let avg = mean(&gaps);
    let min = gaps.iter().copied().fold(f32::INFINITY, f32::min);
    let max = gaps.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let mut messages = vec![format!(
        "Average vertical spacing is {:.2} points (min: {:.2}, max: {:.2}).",
        avg, min, max
    )];
    if (max - min) > avg * 0.5 {
        messages.push(
            "The vertical spacing varies significantly; consider standardizing line spacing for consistency."
                .to_string(),
        );
    } else {
        messages.push("Vertical spacing is consistent.".to_string());
    }

    SpacingStats {
        avg_spacing: Some(avg),
        min_spacing: Some(min),
        max_spacing: Some(max),
        messages,
    }
}

/// Check vertical spacing within left-margin groups.
///
/// Lines join the nearest existing bucket whose representative margin is
/// within `tolerance`; otherwise they found a new bucket keyed by their own
/// margin. Buckets with at least two lines get gap statistics and are
/// flagged when `max - min` exceeds `variation_threshold` times the bucket
/// mean. The lead message reports the average gap across all buckets.
pub fn check_grouped_spacing(
    lines: &[Line],
    tolerance: f32,
    variation_threshold: f32,
) -> GroupedSpacingReport {
    let mut buckets: Vec<(f32, Vec<&Line>)> = Vec::new();
    for line in lines {
        let mut nearest: Option<usize> = None;
        let mut best_dist = f32::INFINITY;
        for (i, (margin, _)) in buckets.iter().enumerate() {
            let dist = (margin - line.left).abs();
            if dist < best_dist {
                best_dist = dist;
                nearest = Some(i);
            }
        }
        match nearest.filter(|_| best_dist <= tolerance) {
            Some(i) => buckets[i].1.push(line),
            None => buckets.push((line.left, vec![line])),
        }
    }
    debug!("grouped {} lines into {} margin buckets", lines.len(), buckets.len());

    let mut groups = Vec::new();
    let mut all_gaps = Vec::new();
    let mut flags = Vec::new();
    for (margin, mut members) in buckets {
        if members.len() < 2 {
            groups.push(MarginGroupSpacing {
                margin,
                line_count: members.len(),
                avg_spacing: None,
                min_spacing: None,
                max_spacing: None,
            });
            continue;
        }

        let gaps = vertical_gaps(&mut members);
        let avg = mean(&gaps);
        let min = gaps.iter().copied().fold(f32::INFINITY, f32::min);
        let max = gaps.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if (max - min) > avg * variation_threshold {
            flags.push(format!(
                "Lines at left margin {:.1} have uneven vertical spacing (avg: {:.2}, min: {:.2}, max: {:.2}).",
                margin, avg, min, max
            ));
        }
        all_gaps.extend(gaps);
        groups.push(MarginGroupSpacing {
            margin,
            line_count: members.len(),
            avg_spacing: Some(avg),
            min_spacing: Some(min),
            max_spacing: Some(max),
        });
    }

    let mut messages = Vec::new();
    let overall = if all_gaps.is_empty() {
        messages.push("Not enough lines to analyze vertical spacing by margin group.".to_string());
        None
    } else {
        let overall = mean(&all_gaps);
        messages.push(format!(
            "Average vertical spacing across margin groups is {:.2} points.",
            overall
        ));
        Some(overall)
    };
    messages.extend(flags);

    GroupedSpacingReport {
        overall_avg_spacing: overall,
        groups,
        messages,
    }
}
