//! Threshold rules over metric summaries, reduced to one recommendation.

use crate::domain::models::{
    MetricBatch, MetricEntry, MetricKind, MetricSummary, LITERS_PER_GLASS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Sleep,
    Hydration,
    Work,
    Mood,
    Default,
}

/// A single prioritized, user-facing recommendation. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub category: InsightCategory,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub action_label: String,
    pub action_target: String,
}

impl Insight {
    /// Fixed fallback when no rule fires.
    pub fn on_track() -> Self {
        Insight {
            category: InsightCategory::Default,
            title: "On Track!".to_string(),
            description: "Your recent logs look balanced. Keep it up.".to_string(),
            priority: 0,
            action_label: "Keep logging".to_string(),
            action_target: "/log".to_string(),
        }
    }
}

/// Pick the single highest-priority firing insight, or the default.
///
/// Rules are evaluated in a fixed order (sleep, hydration, work, mood) and
/// the sort is stable, so equal priorities resolve to the earlier rule.
/// The current priority set {1,2,3,4} cannot collide; the ordering policy
/// is committed anyway so a future category cannot inherit it by accident.
pub fn select_insight(
    summaries: &BTreeMap<MetricKind, MetricSummary>,
    batch: &MetricBatch,
) -> Insight {
    let mut candidates: Vec<Insight> = Vec::new();

    if let Some(sleep) = participating(summaries, MetricKind::Sleep, 1) {
        if sleep.average < 7.0 {
            candidates.push(Insight {
                category: InsightCategory::Sleep,
                title: "Catch Up On Sleep".to_string(),
                description: format!(
                    "You averaged {:.1}h of sleep recently, under the 7h mark.",
                    sleep.average
                ),
                priority: 3,
                action_label: "Review sleep log".to_string(),
                action_target: "/log/sleep".to_string(),
            });
        }
    }

    // Recency bias on purpose: yesterday's intake matters more than a
    // weekly average that an early good day can mask.
    if participating(summaries, MetricKind::Hydration, 1).is_some() {
        if let Some(latest) = latest_entry(&batch.hydration) {
            let liters = latest.glasses.unwrap_or(0) as f64 * LITERS_PER_GLASS;
            if liters < 2.0 {
                candidates.push(Insight {
                    category: InsightCategory::Hydration,
                    title: "Drink More Water".to_string(),
                    description: format!(
                        "Your latest log adds up to {liters:.2}l, short of the 2l goal."
                    ),
                    priority: 2,
                    action_label: "Add a water reminder".to_string(),
                    action_target: "/reminders/new?type=water".to_string(),
                });
            }
        }
    }

    if let Some(work) = participating(summaries, MetricKind::Work, 2) {
        if work.average > 9.0 {
            candidates.push(Insight {
                category: InsightCategory::Work,
                title: "Long Work Days".to_string(),
                description: format!(
                    "You averaged {:.1}h of work recently. Consider winding down earlier.",
                    work.average
                ),
                priority: 1,
                action_label: "Review work hours".to_string(),
                action_target: "/log/work".to_string(),
            });
        }
    }

    if let Some(mood) = participating(summaries, MetricKind::Mood, 2) {
        if mood.average <= 3.0 {
            candidates.push(Insight {
                category: InsightCategory::Mood,
                title: "Rough Stretch".to_string(),
                description: "Your mood has trended low over the last few logs.".to_string(),
                priority: 4,
                action_label: "Open a breathing exercise".to_string(),
                action_target: "/exercises/breathing".to_string(),
            });
        }
    }

    // Stable sort: first-evaluated wins on equal priority.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates.into_iter().next().unwrap_or_else(Insight::on_track)
}

fn participating(
    summaries: &BTreeMap<MetricKind, MetricSummary>,
    kind: MetricKind,
    min_samples: usize,
) -> Option<&MetricSummary> {
    summaries
        .get(&kind)
        .filter(|s| s.sample_count >= min_samples)
}

/// Most recent entry by date; for same-date duplicates the later element
/// of the supplied list wins, matching append-order logs.
fn latest_entry(entries: &[MetricEntry]) -> Option<&MetricEntry> {
    entries.iter().max_by_key(|entry| entry.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn summaries(
        entries: &[(MetricKind, f64, usize)],
    ) -> BTreeMap<MetricKind, MetricSummary> {
        let mut map = BTreeMap::new();
        for kind in MetricKind::ALL {
            map.insert(kind, MetricSummary::EMPTY);
        }
        for (kind, average, sample_count) in entries {
            map.insert(
                *kind,
                MetricSummary {
                    average: *average,
                    sample_count: *sample_count,
                },
            );
        }
        map
    }

    #[test]
    fn test_default_when_nothing_fires() {
        let insight = select_insight(
            &summaries(&[(MetricKind::Sleep, 8.0, 3)]),
            &MetricBatch::default(),
        );
        assert_eq!(insight.category, InsightCategory::Default);
        assert_eq!(insight.title, "On Track!");
        assert_eq!(insight.priority, 0);
    }

    #[test]
    fn test_highest_priority_wins() {
        // Mood (priority 4) and work (priority 1) both fire; mood wins.
        let insight = select_insight(
            &summaries(&[(MetricKind::Mood, 2.0, 3), (MetricKind::Work, 10.0, 3)]),
            &MetricBatch::default(),
        );
        assert_eq!(insight.category, InsightCategory::Mood);
        assert_eq!(insight.priority, 4);
    }

    #[test]
    fn test_sleep_rule_fires_under_seven_hours() {
        let insight = select_insight(
            &summaries(&[(MetricKind::Sleep, 6.2, 1)]),
            &MetricBatch::default(),
        );
        assert_eq!(insight.category, InsightCategory::Sleep);
        assert_eq!(insight.priority, 3);
        assert!(insight.description.contains("6.2"));
    }

    #[test]
    fn test_hydration_rule_uses_latest_entry_not_average() {
        // Weekly average is fine (10 glasses), but the latest day is 3
        // glasses (0.75 l) — the rule must fire on the latest sample.
        let batch = MetricBatch {
            hydration: vec![
                MetricEntry::hydration(date(1), 10),
                MetricEntry::hydration(date(2), 10),
                MetricEntry::hydration(date(3), 3),
            ],
            ..Default::default()
        };
        let insight = select_insight(&summaries(&[(MetricKind::Hydration, 7.7, 3)]), &batch);
        assert_eq!(insight.category, InsightCategory::Hydration);
        assert!(insight.description.contains("0.75"));
    }

    #[test]
    fn test_hydration_rule_quiet_when_latest_is_enough() {
        let batch = MetricBatch {
            hydration: vec![
                MetricEntry::hydration(date(1), 2),
                MetricEntry::hydration(date(2), 9),
            ],
            ..Default::default()
        };
        let insight = select_insight(&summaries(&[(MetricKind::Hydration, 5.5, 2)]), &batch);
        assert_eq!(insight.category, InsightCategory::Default);
    }

    #[test]
    fn test_trend_rules_need_two_samples() {
        // One bad mood log and one long work day are not a trend.
        let insight = select_insight(
            &summaries(&[(MetricKind::Mood, 1.0, 1), (MetricKind::Work, 12.0, 1)]),
            &MetricBatch::default(),
        );
        assert_eq!(insight.category, InsightCategory::Default);
    }

    #[test]
    fn test_work_rule_fires_over_nine_hours() {
        let insight = select_insight(
            &summaries(&[(MetricKind::Work, 9.5, 2)]),
            &MetricBatch::default(),
        );
        assert_eq!(insight.category, InsightCategory::Work);
        assert_eq!(insight.priority, 1);
    }

    #[test]
    fn test_mood_boundary_fires_at_three() {
        let firing = select_insight(
            &summaries(&[(MetricKind::Mood, 3.0, 2)]),
            &MetricBatch::default(),
        );
        assert_eq!(firing.category, InsightCategory::Mood);

        let quiet = select_insight(
            &summaries(&[(MetricKind::Mood, 3.1, 2)]),
            &MetricBatch::default(),
        );
        assert_eq!(quiet.category, InsightCategory::Default);
    }

    #[test]
    fn test_sleep_beats_hydration_and_work() {
        let batch = MetricBatch {
            hydration: vec![MetricEntry::hydration(date(1), 2)],
            ..Default::default()
        };
        let insight = select_insight(
            &summaries(&[
                (MetricKind::Sleep, 5.0, 3),
                (MetricKind::Hydration, 2.0, 1),
                (MetricKind::Work, 11.0, 3),
            ]),
            &batch,
        );
        assert_eq!(insight.category, InsightCategory::Sleep);
    }

    #[test]
    fn test_latest_entry_prefers_later_duplicate() {
        let entries = vec![
            MetricEntry::hydration(date(2), 1),
            MetricEntry::hydration(date(2), 8),
        ];
        assert_eq!(latest_entry(&entries).unwrap().glasses, Some(8));
    }
}
