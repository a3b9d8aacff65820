use serde::{Deserialize, Serialize};

// =========================================================
// Case insights types
// =========================================================

/// Documentation quality rating derived from evidence coverage.
///
/// Thresholds on (events with evidence / total events): >0.8 Excellent,
/// >0.6 Good, >0.3 Fair, otherwise Needs Improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentationQuality {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl DocumentationQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentationQuality::Excellent => "Excellent",
            DocumentationQuality::Good => "Good",
            DocumentationQuality::Fair => "Fair",
            DocumentationQuality::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for DocumentationQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Court readiness phase derived from case and event counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourtReadiness {
    #[serde(rename = "Court Ready")]
    CourtReady,
    #[serde(rename = "Near Ready")]
    NearReady,
    #[serde(rename = "Preparation Phase")]
    PreparationPhase,
}

impl CourtReadiness {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtReadiness::CourtReady => "Court Ready",
            CourtReadiness::NearReady => "Near Ready",
            CourtReadiness::PreparationPhase => "Preparation Phase",
        }
    }
}

impl std::fmt::Display for CourtReadiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregated insights across a user's cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInsights {
    pub total_cases: usize,
    pub total_events: usize,
    /// Events with high/critical impact or police involvement
    pub priority_events: usize,
    pub documentation_quality: DocumentationQuality,
    pub court_readiness: CourtReadiness,
}

/// Route function name constant for case insights
pub const GET_CASE_INSIGHTS: &str = "get_case_insights";
