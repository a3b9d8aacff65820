//! Case summary generation.

use std::collections::BTreeMap;

use crate::api::{CaseSummary, ConcernPriority, DateRange, KeyConcern};
use crate::models::{EventCategory, ImpactLevel, TimelineEvent};

/// Recommendation appended when the record has no events yet.
pub(crate) const NO_EVENTS_RECOMMENDATION: &str =
    "Begin documenting events as they occur to build a reliable case record.";

const FEW_EVENTS_RECOMMENDATION: &str =
    "Continue documenting events regularly to strengthen the case record.";
const LOW_EVIDENCE_RECOMMENDATION: &str =
    "Attach supporting evidence to more events; less than half are currently documented.";
const SAFETY_RECOMMENDATION: &str =
    "Safety-related events are present; discuss protective options with your attorney.";
const WELL_DEVELOPED_RECOMMENDATION: &str =
    "The timeline is well developed; consider preparing a chronology exhibit for court.";

/// Generate a derived summary of a case timeline.
///
/// `events` must be sorted ascending by event date (the repository returns
/// them in that order). An empty timeline yields the fixed "no events"
/// shape with exactly one default recommendation.
pub fn generate_case_summary(events: &[TimelineEvent]) -> CaseSummary {
    if events.is_empty() {
        return CaseSummary {
            total_events: 0,
            date_range: None,
            category_frequency: BTreeMap::new(),
            impact_frequency: BTreeMap::new(),
            key_concerns: vec![],
            recommendations: vec![NO_EVENTS_RECOMMENDATION.to_string()],
        };
    }

    let total_events = events.len();
    let date_range = Some(DateRange {
        start: events[0].event_date,
        end: events[total_events - 1].event_date,
    });

    let mut category_frequency: BTreeMap<String, usize> = BTreeMap::new();
    let mut impact_frequency: BTreeMap<String, usize> = BTreeMap::new();
    for event in events {
        *category_frequency.entry(event.category.label()).or_insert(0) += 1;
        *impact_frequency
            .entry(event.impact_level.as_str().to_string())
            .or_insert(0) += 1;
    }

    let key_concerns = collect_key_concerns(events);
    let recommendations = build_recommendations(events);

    CaseSummary {
        total_events,
        date_range,
        category_frequency,
        impact_frequency,
        key_concerns,
        recommendations,
    }
}

/// Flag priority events as key concerns.
///
/// Critical-impact events are tagged Critical; the rest of the flagged
/// events (high impact or police involvement) are tagged High. The reason
/// names the trigger: elevated impact wins over police involvement.
fn collect_key_concerns(events: &[TimelineEvent]) -> Vec<KeyConcern> {
    events
        .iter()
        .filter(|e| e.is_priority())
        .map(|e| {
            let priority = if e.impact_level == ImpactLevel::Critical {
                ConcernPriority::Critical
            } else {
                ConcernPriority::High
            };
            let reason = if e.impact_level.is_elevated() {
                "High impact event".to_string()
            } else {
                "Police involvement".to_string()
            };
            KeyConcern {
                date: e.event_date,
                title: e.event_title.clone(),
                priority,
                reason,
            }
        })
        .collect()
}

/// Threshold checks for recommendations.
///
/// The checks are independent, not mutually exclusive, and append in a
/// fixed order.
fn build_recommendations(events: &[TimelineEvent]) -> Vec<String> {
    let total = events.len();
    let mut recommendations = Vec::new();

    if total < 5 {
        recommendations.push(FEW_EVENTS_RECOMMENDATION.to_string());
    }

    let with_evidence = events.iter().filter(|e| e.has_evidence()).count();
    if (with_evidence as f64 / total as f64) < 0.5 {
        recommendations.push(LOW_EVIDENCE_RECOMMENDATION.to_string());
    }

    let has_safety_category = events.iter().any(|e| {
        e.category == EventCategory::SafetyConcern || e.category.code() == "DOMESTIC_VIOLENCE"
    });
    if has_safety_category {
        recommendations.push(SAFETY_RECOMMENDATION.to_string());
    }

    if total >= 10 {
        recommendations.push(WELL_DEVELOPED_RECOMMENDATION.to_string());
    }

    recommendations
}
