use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =========================================================
// Evidence summary types
// =========================================================

/// Evidence coverage counters and the composite quality score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub total_events: usize,
    pub events_with_evidence: usize,
    /// Count per non-empty evidence type
    pub evidence_types: BTreeMap<String, usize>,
    pub witness_events: usize,
    pub police_events: usize,
    /// Composite 0-100 metric: evidence coverage plus capped witness and
    /// police bonuses, truncated
    pub quality_score: u32,
}

/// Route function name constant for evidence summary
pub const GET_EVIDENCE_SUMMARY: &str = "get_evidence_summary";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_summary_clone() {
        let mut types = BTreeMap::new();
        types.insert("photo".to_string(), 2);
        let summary = EvidenceSummary {
            total_events: 4,
            events_with_evidence: 2,
            evidence_types: types,
            witness_events: 1,
            police_events: 0,
            quality_score: 75,
        };
        let cloned = summary.clone();
        assert_eq!(cloned.quality_score, 75);
        assert_eq!(cloned.evidence_types["photo"], 2);
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_EVIDENCE_SUMMARY, "get_evidence_summary");
    }
}
