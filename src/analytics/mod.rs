pub mod aggregate;
pub mod insights;
pub mod score;
