//! Hybrid section grouping.
//!
//! Partitions reconstructed lines into a known-heading class (exact string
//! match against a fixed vocabulary) and a residual set clustered by k-means
//! over a 4-dimensional feature space, assigns each cluster a human-readable
//! role by heuristic, and emits per-group deviation reports.
//!
//! Every non-blank line lands in exactly one group; blank-text lines are
//! excluded before clustering.

pub mod features;
pub mod kmeans;

use indexmap::IndexMap;
use log::{debug, warn};
use phf::phf_set;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::layout::Line;
use features::extract_features;
use kmeans::cluster_features;

/// Section names recognized by exact match (after trimming and uppercasing).
static SECTION_VOCABULARY: phf::Set<&'static str> = phf_set! {
    "EDUCATION",
    "EXPERIENCE",
    "PROJECTS",
    "SKILLS",
    "CERTIFICATIONS",
    "SUMMARY",
    "OBJECTIVE",
};

/// Group label for pre-classified section headings.
pub const SECTION_HEADING_LABEL: &str = "Section Heading";

/// Group label emitted when no lines remain after pre-classification.
const RESIDUAL_EMPTY_LABEL: &str = "Other";

/// One member line of a group, as reported to callers.
#[derive(Debug, Clone, Serialize)]
pub struct LineSummary {
    /// Page the line appears on
    pub page: u32,
    /// Line text
    pub text: String,
    /// Average font size, rounded to two decimals
    pub font_size: f32,
    /// Left margin, rounded to two decimals
    pub left_margin: f32,
}

/// Summary of one group of lines.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Cluster index for clustered groups; `None` for the pre-classified
    /// bucket and the empty-residue group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_index: Option<usize>,
    /// Number of member lines
    pub num_lines: usize,
    /// Mean font size; omitted for empty groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_font_size: Option<f32>,
    /// Mean left margin; omitted for empty groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_left_margin: Option<f32>,
    /// Population standard deviation of font size; omitted for empty groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_font_size: Option<f32>,
    /// Population standard deviation of left margin; omitted for empty groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_left_margin: Option<f32>,
    /// Member lines in group order
    pub lines: Vec<LineSummary>,
}

impl GroupReport {
    fn empty(cluster_index: Option<usize>) -> Self {
        Self {
            cluster_index,
            num_lines: 0,
            avg_font_size: None,
            avg_left_margin: None,
            std_font_size: None,
            std_left_margin: None,
            lines: Vec::new(),
        }
    }
}

/// Output of the hybrid grouping engine.
#[derive(Debug, Clone, Serialize)]
pub struct SectionGroups {
    /// Group label → report, in emission order
    pub groups: IndexMap<String, GroupReport>,
    /// Flat ordered list of deviation messages from all stages
    pub messages: Vec<String>,
}

/// Partitions lines into semantic groups and reports style deviations.
#[derive(Debug, Clone)]
pub struct SectionGrouper {
    config: AnalysisConfig,
}

impl SectionGrouper {
    /// Create a grouper with the given thresholds.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Group lines into section headings, sub-headings, and body text.
    ///
    /// Stage 1 pre-classifies exact vocabulary matches into the
    /// `"Section Heading"` bucket. Stage 2 clusters the remainder with
    /// seeded k-means (skipped entirely when the remainder is empty or
    /// smaller than the cluster count). Stage 3 labels each cluster
    /// heuristically; stage 4 reports font and margin deviators per group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clustering`](crate::error::Error::Clustering) if the
    /// k-means fit fails.
    pub fn group(&self, lines: &[Line]) -> Result<SectionGroups> {
        let mut groups: IndexMap<String, GroupReport> = IndexMap::new();
        let mut messages = Vec::new();

        let candidates: Vec<&Line> = lines.iter().filter(|l| !l.text.is_empty()).collect();
        let candidate_count = candidates.len();
        let (preclassified, remaining): (Vec<&Line>, Vec<&Line>) = candidates
            .into_iter()
            .partition(|l| SECTION_VOCABULARY.contains(l.text.trim().to_uppercase().as_str()));
        debug!(
            "pre-classified {} of {} lines as section headings",
            preclassified.len(),
            candidate_count
        );

        if preclassified.is_empty() {
            groups.insert(SECTION_HEADING_LABEL.to_string(), GroupReport::empty(None));
        } else {
            let (report, font_fraction, margin_fraction) =
                self.build_report(None, &preclassified);
            if font_fraction > self.config.deviation_reporting_threshold {
                messages.push(format!(
                    "{:.0}% of Section Headings deviate in font size from the average.",
                    font_fraction * 100.0
                ));
            }
            if margin_fraction > self.config.deviation_reporting_threshold {
                messages.push(format!(
                    "{:.0}% of Section Headings deviate in left margin from the average.",
                    margin_fraction * 100.0
                ));
            }
            groups.insert(SECTION_HEADING_LABEL.to_string(), report);
        }

        if remaining.is_empty() {
            // No further lines to group; clustering on an empty set is undefined
            groups.insert(RESIDUAL_EMPTY_LABEL.to_string(), GroupReport::empty(None));
            return Ok(SectionGroups { groups, messages });
        }

        let labels = if remaining.len() < self.config.num_clusters {
            warn!(
                "only {} lines left for {} clusters; using a single cluster",
                remaining.len(),
                self.config.num_clusters
            );
            vec![0; remaining.len()]
        } else {
            cluster_features(
                extract_features(&remaining),
                self.config.num_clusters,
                self.config.cluster_seed,
            )?
        };

        let mut clusters: IndexMap<usize, Vec<&Line>> = IndexMap::new();
        for (&cluster, &line) in labels.iter().zip(remaining.iter()) {
            clusters.entry(cluster).or_default().push(line);
        }

        for (cluster, members) in &clusters {
            let label = label_cluster(members);
            let key = format!("{} (Cluster {})", label, cluster);
            let (report, font_fraction, margin_fraction) =
                self.build_report(Some(*cluster), members);
            if font_fraction > self.config.deviation_reporting_threshold {
                messages.push(format!(
                    "In {} (Cluster {}), {:.0}% of lines deviate in font size from the group average.",
                    label,
                    cluster,
                    font_fraction * 100.0
                ));
            }
            if margin_fraction > self.config.deviation_reporting_threshold {
                messages.push(format!(
                    "In {} (Cluster {}), {:.0}% of lines deviate in left margin from the group average.",
                    label,
                    cluster,
                    margin_fraction * 100.0
                ));
            }
            groups.insert(key, report);
        }

        Ok(SectionGroups { groups, messages })
    }

    /// Build one group's report and its deviating fractions for font size
    /// and left margin.
    ///
    /// A line deviates in font size when its absolute deviation from the
    /// group mean exceeds both the relative threshold and the absolute
    /// floor; margins use the analogous dual-threshold rule.
    fn build_report(
        &self,
        cluster_index: Option<usize>,
        members: &[&Line],
    ) -> (GroupReport, f32, f32) {
        let sizes: Vec<f32> = members.iter().map(|l| l.avg_size).collect();
        let margins: Vec<f32> = members.iter().map(|l| l.left).collect();
        let avg_font = mean(&sizes);
        let avg_margin = mean(&margins);

        let font_deviators = sizes
            .iter()
            .filter(|&&s| {
                let diff = (s - avg_font).abs();
                diff > avg_font * self.config.font_deviation && diff > self.config.min_font_diff
            })
            .count();
        let margin_deviators = margins
            .iter()
            .filter(|&&m| {
                let diff = (m - avg_margin).abs();
                diff > self.config.margin_deviation && diff > self.config.min_margin_diff
            })
            .count();

        let report = GroupReport {
            cluster_index,
            num_lines: members.len(),
            avg_font_size: Some(round2(avg_font)),
            avg_left_margin: Some(round2(avg_margin)),
            std_font_size: Some(round2(population_std(&sizes, avg_font))),
            std_left_margin: Some(round2(population_std(&margins, avg_margin))),
            lines: members
                .iter()
                .map(|l| LineSummary {
                    page: l.page,
                    text: l.text.clone(),
                    font_size: round2(l.avg_size),
                    left_margin: round2(l.left),
                })
                .collect(),
        };
        let n = members.len() as f32;
        (report, font_deviators as f32 / n, margin_deviators as f32 / n)
    }
}

/// Assign a role to a cluster from its average features.
fn label_cluster(members: &[&Line]) -> &'static str {
    let n = members.len() as f32;
    let uppercase_ratio = members.iter().filter(|l| l.is_all_caps()).count() as f32 / n;
    let avg_length = members
        .iter()
        .map(|l| l.text.chars().count() as f32)
        .sum::<f32>()
        / n;
    let avg_margin = members.iter().map(|l| l.left).sum::<f32>() / n;

    if uppercase_ratio > 0.8 && avg_length < 20.0 {
        SECTION_HEADING_LABEL
    } else if avg_margin > 50.0 {
        "Sub-heading"
    } else {
        "Body Text"
    }
}

fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

fn population_std(values: &[f32], mean: f32) -> f32 {
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32).sqrt()
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
