pub mod pipeline;
pub mod templates;
