//! Contracts for the external store. The core is format-agnostic and only
//! sees already-deserialized records; transport and persistence live behind
//! these traits.

use crate::domain::models::{DateRange, MetricBatch, Reminder, ReminderSpec};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// CRUD over persisted reminders. Any call may fail transiently; a fetch
/// the caller abandoned reports `Error::Cancelled` instead.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    async fn create_reminder(&self, spec: &ReminderSpec) -> Result<Reminder>;
    async fn list_reminders(&self) -> Result<Vec<Reminder>>;
    async fn update_reminder(&self, reminder: &Reminder) -> Result<Reminder>;
    async fn delete_reminder(&self, id: Uuid) -> Result<()>;
}

/// Read side of the metric log, bucketed per kind over a date range.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch_metrics(&self, range: DateRange) -> Result<MetricBatch>;
}
