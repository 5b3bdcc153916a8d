//! Request and response models. One type per file.

pub mod risk_assessment;
pub mod student_metrics;
pub mod validation_error;
