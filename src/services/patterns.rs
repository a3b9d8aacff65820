//! Behavioral pattern analysis over a case timeline.

use crate::api::{EscalationIndicator, PatternAnalysis};
use crate::models::{EventCategory, TimelineEvent};

const ESCALATING_SUMMARY: &str =
    "Escalating pattern detected: event severity is increasing over time.";
const SAFETY_SUMMARY: &str =
    "Multiple safety concerns documented; consider discussing protective measures with counsel.";
const COERCIVE_CONTROL_SUMMARY: &str =
    "High-frequency communication events may indicate a pattern of coercive control.";
const NON_COMPLIANCE_SUMMARY: &str =
    "Repeated order compliance issues suggest a pattern of non-compliance.";
const DEFAULT_SUMMARY: &str =
    "Events show a typical case progression without strong escalation indicators.";

/// Walk events in ascending date order and record every transition from a
/// low/medium-impact event to a high/critical-impact event.
pub(crate) fn detect_escalations(sorted_events: &[TimelineEvent]) -> Vec<EscalationIndicator> {
    let mut indicators = Vec::new();

    for pair in sorted_events.windows(2) {
        let previous = &pair[0];
        let current = &pair[1];
        if !previous.impact_level.is_elevated() && current.impact_level.is_elevated() {
            indicators.push(EscalationIndicator {
                date: current.event_date,
                title: current.event_title.clone(),
                from_level: previous.impact_level,
                to_level: current.impact_level,
            });
        }
    }

    indicators
}

/// Select the pattern summary by first-matching rule.
///
/// Exactly one message is ever selected; the priority order is fixed and
/// conditions are not combined even when several hold at once.
pub(crate) fn select_pattern_summary(
    escalation_count: usize,
    safety_concerns: usize,
    communication_frequency: usize,
    order_violations: usize,
) -> &'static str {
    if escalation_count > 2 {
        ESCALATING_SUMMARY
    } else if safety_concerns > 3 {
        SAFETY_SUMMARY
    } else if communication_frequency > 10 {
        COERCIVE_CONTROL_SUMMARY
    } else if order_violations > 2 {
        NON_COMPLIANCE_SUMMARY
    } else {
        DEFAULT_SUMMARY
    }
}

/// Analyze category frequencies and impact escalation for a case timeline.
///
/// Events may arrive in any order; they are re-sorted by date ascending
/// before escalation detection.
pub fn analyze_patterns(events: &[TimelineEvent]) -> PatternAnalysis {
    let communication_frequency = events
        .iter()
        .filter(|e| e.category == EventCategory::Communication)
        .count();
    let safety_concerns = events
        .iter()
        .filter(|e| e.category == EventCategory::SafetyConcern)
        .count();
    let order_violations = events
        .iter()
        .filter(|e| e.category == EventCategory::OrderCompliance)
        .count();

    let mut sorted: Vec<TimelineEvent> = events.to_vec();
    sorted.sort_by_key(|e| e.event_date);

    let escalation_indicators = detect_escalations(&sorted);
    let pattern_summary = select_pattern_summary(
        escalation_indicators.len(),
        safety_concerns,
        communication_frequency,
        order_violations,
    )
    .to_string();

    PatternAnalysis {
        communication_frequency,
        safety_concerns,
        order_violations,
        escalation_indicators,
        pattern_summary,
    }
}
