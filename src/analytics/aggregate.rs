use crate::domain::models::{MetricBatch, MetricEntry, MetricKind, MetricSummary};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Reduce entries of a single kind to `{average, sample_count}`.
///
/// Empty input yields the zero summary; callers must treat
/// `sample_count == 0` as "no data". An entry that does not carry the
/// requested kind's value field means the caller mixed kinds — that is a
/// validation error, not a silent skip.
pub fn summarize(kind: MetricKind, entries: &[MetricEntry]) -> Result<MetricSummary> {
    if entries.is_empty() {
        return Ok(MetricSummary::EMPTY);
    }

    let mut sum = 0.0;
    for entry in entries {
        let value = entry.value_for(kind).ok_or_else(|| {
            Error::validation(format!(
                "entry on {} carries no {} value",
                entry.date,
                kind.as_str()
            ))
        })?;
        if value < 0.0 {
            return Err(Error::validation(format!(
                "negative {} value on {}",
                kind.as_str(),
                entry.date
            )));
        }
        sum += value;
    }

    Ok(MetricSummary {
        average: sum / entries.len() as f64,
        sample_count: entries.len(),
    })
}

/// Summaries for every metric kind in a fetched batch. Kinds without
/// entries are present with the zero summary so downstream consumers see
/// the full map.
pub fn summarize_batch(batch: &MetricBatch) -> Result<BTreeMap<MetricKind, MetricSummary>> {
    let mut summaries = BTreeMap::new();
    for kind in MetricKind::ALL {
        summaries.insert(kind, summarize(kind, batch.entries_for(kind))?);
    }
    Ok(summaries)
}
