use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ImpactLevel;

// =========================================================
// Pattern analysis types
// =========================================================

/// A recorded escalation: a low/medium-impact event followed by a
/// high/critical-impact event later in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationIndicator {
    /// Date of the escalated (current) event
    pub date: NaiveDate,
    /// Title of the escalated event
    pub title: String,
    pub from_level: ImpactLevel,
    pub to_level: ImpactLevel,
}

/// Behavioral pattern counters and escalation detection over a case timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// COMMUNICATION events
    pub communication_frequency: usize,
    /// SAFETY_CONCERN events
    pub safety_concerns: usize,
    /// ORDER_COMPLIANCE events
    pub order_violations: usize,
    pub escalation_indicators: Vec<EscalationIndicator>,
    /// Single message selected by first-matching rule
    pub pattern_summary: String,
}

/// Route function name constant for pattern analysis
pub const GET_PATTERN_ANALYSIS: &str = "get_pattern_analysis";
