use serde::{Deserialize, Serialize};

/// Predicted disengagement classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "On Track")]
    OnTrack,
}

impl RiskStatus {
    /// The advice paired with each status
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskStatus::AtRisk => "Suggest tutoring",
            RiskStatus::OnTrack => "Continue current path",
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub status: RiskStatus,
    pub recommendation: String,
}
