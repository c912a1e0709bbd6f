//! Best-effort batch application of a template pack.

use crate::domain::models::Reminder;
use crate::domain::templates::TemplatePack;
use crate::error::Error;
use crate::store::ReminderStore;
use std::time::Duration;

/// One item's failure, kept for user-facing reporting
/// ("N of M reminders created; the rest failed because ...").
#[derive(Debug)]
pub struct ApplyFailure {
    pub index: usize,
    pub error: Error,
}

/// Aggregate result of one batch. Not transactional: partial successes
/// stand, and the caller surfaces how many of the total failed.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub created: Vec<Reminder>,
    pub attempted: usize,
    pub failures: Vec<ApplyFailure>,
}

impl ApplyOutcome {
    pub fn succeeded(&self) -> usize {
        self.created.len()
    }

    pub fn first_failure(&self) -> Option<&ApplyFailure> {
        self.failures.first()
    }
}

/// Applies a pack's specs one at a time, in spec order. Sequential on
/// purpose: it bounds load on the backing store and keeps reported
/// progress monotonic. An optional pace inserts a delay between creates,
/// the way a broadcast loop throttles against a rate-limited backend.
#[derive(Debug, Default)]
pub struct TemplateApplier {
    pace: Option<Duration>,
}

impl TemplateApplier {
    pub fn new() -> Self {
        Self { pace: None }
    }

    pub fn with_pace(pace: Duration) -> Self {
        Self { pace: Some(pace) }
    }

    /// Create every reminder in the pack, skipping over per-item failures.
    ///
    /// `on_item_done(reminder, index, total)` fires after every attempt,
    /// successful or not, in spec order. Once started the batch runs to
    /// completion of the full spec list; there is no mid-batch abort.
    pub async fn apply<F>(
        &self,
        store: &dyn ReminderStore,
        pack: &TemplatePack,
        mut on_item_done: F,
    ) -> ApplyOutcome
    where
        F: FnMut(Option<&Reminder>, usize, usize),
    {
        let total = pack.specs.len();
        let mut created = Vec::new();
        let mut failures = Vec::new();

        tracing::info!("applying template pack {} ({} reminders)", pack.id, total);

        for (index, spec) in pack.specs.iter().enumerate() {
            // A spec that fails validation never reaches the store but
            // still counts as an attempted item.
            let result = match spec.validate() {
                Ok(()) => store.create_reminder(spec).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(reminder) => {
                    tracing::debug!(
                        "created {} reminder {}/{} from pack {}",
                        reminder.kind.as_str(),
                        index + 1,
                        total,
                        pack.id
                    );
                    on_item_done(Some(&reminder), index, total);
                    created.push(reminder);
                }
                Err(error) => {
                    tracing::error!(
                        "failed to create reminder {}/{} from pack {}: {}",
                        index + 1,
                        total,
                        pack.id,
                        error
                    );
                    on_item_done(None, index, total);
                    failures.push(ApplyFailure { index, error });
                }
            }

            if let Some(pace) = self.pace {
                if index + 1 < total {
                    tokio::time::sleep(pace).await;
                }
            }
        }

        tracing::info!(
            "template pack {} applied: {} created, {} failed",
            pack.id,
            created.len(),
            failures.len()
        );

        ApplyOutcome {
            created,
            attempted: total,
            failures,
        }
    }
}
