//! Wellness score from per-kind summaries.
//!
//! Each kind with at least one sample contributes a 0–20 sub-score from a
//! fixed-breakpoint rubric; the final score is the unweighted mean of the
//! participating sub-scores, rounded. Fixed breakpoints keep every tier
//! auditable; missing data removes a voter instead of dragging the score.

use crate::domain::models::{MetricKind, MetricSummary, LITERS_PER_GLASS};
use std::collections::BTreeMap;

/// Sub-score (0–20 scale) for one kind's average.
pub fn sub_score(kind: MetricKind, average: f64) -> f64 {
    match kind {
        MetricKind::Mood => mood_sub_score(average),
        MetricKind::Sleep => sleep_sub_score(average),
        MetricKind::Hydration => hydration_sub_score(average),
        MetricKind::Work => work_sub_score(average),
    }
}

/// Mood values run 1 (angry) to 5 (happy); scale to the 0–20 band.
fn mood_sub_score(average: f64) -> f64 {
    (average * 4.0).clamp(0.0, 20.0)
}

fn sleep_sub_score(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        20.0
    } else if (6.0..7.0).contains(&hours) || (9.0..=10.0).contains(&hours) {
        15.0
    } else {
        5.0
    }
}

fn hydration_sub_score(glasses: f64) -> f64 {
    let liters = glasses * LITERS_PER_GLASS;
    if liters >= 2.0 {
        20.0
    } else if liters >= 1.0 {
        15.0
    } else {
        5.0
    }
}

fn work_sub_score(hours: f64) -> f64 {
    if (7.0..=8.0).contains(&hours) {
        20.0
    } else if hours > 10.0 || hours < 4.0 {
        5.0
    } else {
        15.0
    }
}

/// Combined score over whichever kinds have samples; 0 with no voters.
pub fn compute_score(summaries: &BTreeMap<MetricKind, MetricSummary>) -> u8 {
    let mut total = 0.0;
    let mut voters = 0u32;

    for (kind, summary) in summaries {
        if !summary.has_samples() {
            continue;
        }
        total += sub_score(*kind, summary.average);
        voters += 1;
    }

    if voters == 0 {
        return 0;
    }
    (total / voters as f64).round() as u8
}
