use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Case summary types
// =========================================================

/// Inclusive date range from first to last event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Priority tag attached to a key concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernPriority {
    Critical,
    High,
}

/// A flagged event the user should be ready to discuss in court.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConcern {
    pub date: NaiveDate,
    pub title: String,
    pub priority: ConcernPriority,
    /// Why the event was flagged ("High impact event" or "Police involvement")
    pub reason: String,
}

/// Derived summary of a case's timeline.
///
/// Frequency maps are keyed by human-readable labels (categories) and
/// wire-format level strings (impact), in sorted key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSummary {
    pub total_events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    pub category_frequency: BTreeMap<String, usize>,
    pub impact_frequency: BTreeMap<String, usize>,
    pub key_concerns: Vec<KeyConcern>,
    pub recommendations: Vec<String>,
}

/// Route function name constant for case summary
pub const GET_CASE_SUMMARY: &str = "get_case_summary";
