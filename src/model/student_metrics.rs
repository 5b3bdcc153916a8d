use serde::Deserialize;

/// Metrics submitted for a single student. Built from the request body and
/// discarded once the response is sent; nothing is persisted.
///
/// `attendance` and `midterm_score` are expected to fall in 0-100 and
/// `assignments_completed` to be non-negative, but none of this is enforced.
/// The count is signed so that a negative value deserializes and flows
/// through the formula rather than failing validation.
#[derive(Debug, Deserialize)]
pub struct StudentMetrics {
    pub attendance: f64,
    pub midterm_score: f64,
    pub assignments_completed: i64,
}
