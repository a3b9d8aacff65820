//! Cross-case insights aggregation.

use crate::api::{CaseInsights, CourtReadiness, DocumentationQuality};
use crate::models::TimelineEvent;

/// Rate documentation quality from evidence coverage.
///
/// The ratio is (events with a non-empty evidence type / total events);
/// with no events the ratio is zero and the lowest rating applies.
pub(crate) fn rate_documentation_quality(events: &[TimelineEvent]) -> DocumentationQuality {
    let total = events.len();
    let with_evidence = events.iter().filter(|e| e.has_evidence()).count();

    let ratio = if total > 0 {
        with_evidence as f64 / total as f64
    } else {
        0.0
    };

    if ratio > 0.8 {
        DocumentationQuality::Excellent
    } else if ratio > 0.6 {
        DocumentationQuality::Good
    } else if ratio > 0.3 {
        DocumentationQuality::Fair
    } else {
        DocumentationQuality::NeedsImprovement
    }
}

/// Rate court readiness from case and event counts.
pub(crate) fn rate_court_readiness(total_cases: usize, total_events: usize) -> CourtReadiness {
    if total_cases > 0 && total_events > 10 {
        CourtReadiness::CourtReady
    } else if total_cases > 0 && total_events > 5 {
        CourtReadiness::NearReady
    } else {
        CourtReadiness::PreparationPhase
    }
}

/// Compute aggregate insights over all of a user's cases.
///
/// `events` is the flattened collection of timeline events across the
/// counted cases; ordering does not matter here, only counts.
pub fn compute_case_insights(total_cases: usize, events: &[TimelineEvent]) -> CaseInsights {
    let total_events = events.len();
    let priority_events = events.iter().filter(|e| e.is_priority()).count();

    CaseInsights {
        total_cases,
        total_events,
        priority_events,
        documentation_quality: rate_documentation_quality(events),
        court_readiness: rate_court_readiness(total_cases, total_events),
    }
}
