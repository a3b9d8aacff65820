//! Evidence coverage summary and quality scoring.

use std::collections::BTreeMap;

use crate::api::EvidenceSummary;
use crate::models::TimelineEvent;

/// Summarize evidence coverage across a case timeline.
///
/// The quality score is a composite 0-100 integer: the evidence coverage
/// ratio plus a witness bonus capped at 0.3 and a police bonus capped at
/// 0.2, scaled to 100 and truncated. A timeline with no events scores 0.
pub fn summarize_evidence(events: &[TimelineEvent]) -> EvidenceSummary {
    let total_events = events.len();

    let events_with_evidence = events.iter().filter(|e| e.has_evidence()).count();
    let witness_events = events.iter().filter(|e| e.witness_present).count();
    let police_events = events.iter().filter(|e| e.police_called).count();

    let mut evidence_types: BTreeMap<String, usize> = BTreeMap::new();
    for event in events {
        if let Some(evidence_type) = event.evidence_type.as_deref() {
            if !evidence_type.is_empty() {
                *evidence_types.entry(evidence_type.to_string()).or_insert(0) += 1;
            }
        }
    }

    let quality_score = if total_events == 0 {
        0
    } else {
        let total = total_events as f64;
        let evidence_ratio = events_with_evidence as f64 / total;
        let witness_bonus = (witness_events as f64 / total).min(0.3);
        let police_bonus = (police_events as f64 / total).min(0.2);
        // Truncate, then clamp: a fully documented timeline with heavy
        // witness/police involvement would otherwise exceed 100.
        (((evidence_ratio + witness_bonus + police_bonus) * 100.0).floor() as u32).min(100)
    };

    EvidenceSummary {
        total_events,
        events_with_evidence,
        evidence_types,
        witness_events,
        police_events,
        quality_score,
    }
}
