//! Core domain logic of the vitalog wellness tracker: metric aggregation,
//! wellness scoring, insight selection, reminder recurrence, and batch
//! template application. Transport, rendering and persistence live outside
//! this crate, behind the `store` traits.

pub mod analytics;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

pub use analytics::insights::{Insight, InsightCategory};
pub use domain::models::{
    DateRange, MetricBatch, MetricEntry, MetricKind, MetricSummary, Mood, Reminder, ReminderKind,
    ReminderSpec, Sound, Weekday,
};
pub use domain::templates::TemplatePack;
pub use error::{Error, Result};
pub use services::pipeline::DashboardSnapshot;
pub use services::templates::{ApplyFailure, ApplyOutcome, TemplateApplier};
pub use store::{MetricsSource, ReminderStore};
