use serde::{Deserialize, Serialize};

use crate::models::ImpactLevel;

// =========================================================
// Chronology types
// =========================================================

/// One numbered entry in a court-ready chronology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChronologyEntry {
    /// 1-indexed position in the date-ascending sequence
    pub sequence: usize,
    /// Formatted date, e.g. "February 10, 2024"
    pub date: String,
    pub title: String,
    /// Human-readable category label
    pub category: String,
    pub impact_level: ImpactLevel,
    /// Whole-day gap from the preceding entry; 0 for the first entry
    pub days_since_previous: i64,
}

/// Route function name constant for chronology
pub const GET_CHRONOLOGY: &str = "get_chronology";
