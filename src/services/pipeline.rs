//! Dashboard snapshot: fetch a metric window, aggregate it, and derive the
//! score and the one surfaced insight.

use crate::analytics::{aggregate, insights, score};
use crate::analytics::insights::Insight;
use crate::domain::models::{DateRange, MetricKind, MetricSummary};
use crate::error::Result;
use crate::store::MetricsSource;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    pub score: u8,
    pub insight: Insight,
    pub summaries: BTreeMap<MetricKind, MetricSummary>,
}

/// Build the snapshot for one window.
///
/// A cancelled fetch (navigation away mid-load) is a no-op: `Ok(None)`,
/// neither the success nor the error path of the caller runs. Transient
/// store failures propagate.
pub async fn build_snapshot(
    source: &dyn MetricsSource,
    range: DateRange,
) -> Result<Option<DashboardSnapshot>> {
    let batch = match source.fetch_metrics(range).await {
        Ok(batch) => batch,
        Err(e) if e.is_cancelled() => {
            tracing::debug!("metric fetch cancelled, skipping snapshot");
            return Ok(None);
        }
        Err(e) => {
            tracing::warn!("metric fetch failed: {e}");
            return Err(e);
        }
    };

    let summaries = aggregate::summarize_batch(&batch)?;
    let score = score::compute_score(&summaries);
    let insight = insights::select_insight(&summaries, &batch);

    tracing::debug!(
        "snapshot {} to {}: score {}, insight {}",
        range.start,
        range.end,
        score,
        insight.title
    );

    Ok(Some(DashboardSnapshot {
        range,
        score,
        insight,
        summaries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::insights::InsightCategory;
    use crate::domain::models::{MetricBatch, MetricEntry};
    use crate::error::Error;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    enum FakeSource {
        Batch(MetricBatch),
        Cancelled,
        Down,
    }

    #[async_trait]
    impl MetricsSource for FakeSource {
        async fn fetch_metrics(&self, _range: DateRange) -> Result<MetricBatch> {
            match self {
                FakeSource::Batch(batch) => Ok(batch.clone()),
                FakeSource::Cancelled => Err(Error::Cancelled),
                FakeSource::Down => Err(Error::store(anyhow!("connection reset"))),
            }
        }
    }

    fn week() -> DateRange {
        DateRange::trailing_week(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap())
    }

    #[tokio::test]
    async fn test_snapshot_over_a_good_week() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let batch = MetricBatch {
            sleep: vec![
                MetricEntry::sleep(date, 8.0),
                MetricEntry::sleep(date, 7.5),
            ],
            ..Default::default()
        };
        let snapshot = build_snapshot(&FakeSource::Batch(batch), week())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.score, 20);
        assert_eq!(snapshot.insight.category, InsightCategory::Default);
        assert_eq!(snapshot.summaries[&MetricKind::Sleep].sample_count, 2);
    }

    #[tokio::test]
    async fn test_cancelled_fetch_is_a_no_op() {
        let result = build_snapshot(&FakeSource::Cancelled, week()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let err = build_snapshot(&FakeSource::Down, week()).await.unwrap_err();
        assert!(matches!(err, Error::Store(_)));
        assert!(!err.is_cancelled());
    }

    #[tokio::test]
    async fn test_empty_window_scores_zero_and_stays_on_track() {
        let snapshot = build_snapshot(&FakeSource::Batch(MetricBatch::default()), week())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.insight.category, InsightCategory::Default);
    }
}
