//! The risk formula applied to submitted student metrics.
//!
//! The computation is a fixed weighted sum. It holds no state and performs no
//! I/O, so identical metrics always produce an identical assessment.

use crate::model::risk_assessment::{RiskAssessment, RiskStatus};
use crate::model::student_metrics::StudentMetrics;

const ATTENDANCE_WEIGHT: f64 = 0.4;
const MIDTERM_WEIGHT: f64 = 0.4;
const ASSIGNMENT_WEIGHT: f64 = 2.0;

/// Scores above this are classified At Risk
const AT_RISK_THRESHOLD: f64 = 50.0;

/// Derives a risk assessment from the given metrics
///
/// The score is clamped to [0, 100] and rounded to 2 decimal places before
/// classification, so the returned fields are always mutually consistent.
/// Input ranges are not validated; out-of-range values flow straight through
/// the formula and land on one of the clamp boundaries.
pub fn predict(metrics: &StudentMetrics) -> RiskAssessment {
    let base = metrics.attendance * ATTENDANCE_WEIGHT
        + metrics.midterm_score * MIDTERM_WEIGHT
        + metrics.assignments_completed as f64 * ASSIGNMENT_WEIGHT;

    let risk_score = round2((100.0 - base).clamp(0.0, 100.0));

    let status = if risk_score > AT_RISK_THRESHOLD {
        RiskStatus::AtRisk
    } else {
        RiskStatus::OnTrack
    };

    RiskAssessment {
        risk_score,
        status,
        recommendation: status.recommendation().to_owned(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
