pub mod models;
pub mod recurrence;
pub mod templates;
