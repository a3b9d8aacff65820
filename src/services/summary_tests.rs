use chrono::{NaiveDate, Utc};

use crate::api::{CaseId, ConcernPriority};
use crate::models::{EventCategory, ImpactLevel, TimelineEvent};
use crate::services::summary::generate_case_summary;

fn create_test_event(
    day: u32,
    category: EventCategory,
    impact: ImpactLevel,
    evidence: Option<&str>,
) -> TimelineEvent {
    TimelineEvent {
        id: None,
        case_id: CaseId::new(1),
        event_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        event_time: None,
        event_title: format!("event {}", day),
        event_description: String::new(),
        category,
        evidence_type: evidence.map(|s| s.to_string()),
        impact_level: impact,
        witness_present: false,
        police_called: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_empty_summary_shape() {
    let summary = generate_case_summary(&[]);

    assert_eq!(summary.total_events, 0);
    assert!(summary.date_range.is_none());
    assert!(summary.category_frequency.is_empty());
    assert!(summary.impact_frequency.is_empty());
    assert!(summary.key_concerns.is_empty());
    assert_eq!(summary.recommendations.len(), 1);
}

#[test]
fn test_date_range_first_to_last() {
    let events = vec![
        create_test_event(5, EventCategory::Communication, ImpactLevel::Low, None),
        create_test_event(12, EventCategory::Financial, ImpactLevel::Low, None),
        create_test_event(20, EventCategory::LegalEvent, ImpactLevel::Low, None),
    ];
    let summary = generate_case_summary(&events);

    let range = summary.date_range.unwrap();
    assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
}

#[test]
fn test_frequency_maps_use_labels() {
    let events = vec![
        create_test_event(1, EventCategory::Communication, ImpactLevel::Low, None),
        create_test_event(2, EventCategory::Communication, ImpactLevel::Medium, None),
        create_test_event(3, EventCategory::SafetyConcern, ImpactLevel::High, None),
    ];
    let summary = generate_case_summary(&events);

    assert_eq!(summary.category_frequency["Communication"], 2);
    assert_eq!(summary.category_frequency["Safety Concern"], 1);
    assert_eq!(summary.impact_frequency["low"], 1);
    assert_eq!(summary.impact_frequency["medium"], 1);
    assert_eq!(summary.impact_frequency["high"], 1);
}

#[test]
fn test_key_concern_tagging() {
    let mut police_event =
        create_test_event(3, EventCategory::Communication, ImpactLevel::Low, None);
    police_event.police_called = true;

    let events = vec![
        create_test_event(1, EventCategory::SafetyConcern, ImpactLevel::Critical, None),
        create_test_event(2, EventCategory::ChildWellbeing, ImpactLevel::High, None),
        police_event,
        create_test_event(4, EventCategory::Financial, ImpactLevel::Low, None),
    ];
    let summary = generate_case_summary(&events);

    assert_eq!(summary.key_concerns.len(), 3);
    assert_eq!(summary.key_concerns[0].priority, ConcernPriority::Critical);
    assert_eq!(summary.key_concerns[0].reason, "High impact event");
    assert_eq!(summary.key_concerns[1].priority, ConcernPriority::High);
    assert_eq!(summary.key_concerns[1].reason, "High impact event");
    assert_eq!(summary.key_concerns[2].priority, ConcernPriority::High);
    assert_eq!(summary.key_concerns[2].reason, "Police involvement");
}

#[test]
fn test_recommendations_are_independent_and_ordered() {
    // Three undocumented events with a safety concern: triggers the
    // few-events, low-evidence, and safety checks in that order.
    let events = vec![
        create_test_event(1, EventCategory::Communication, ImpactLevel::Low, None),
        create_test_event(2, EventCategory::SafetyConcern, ImpactLevel::Medium, None),
        create_test_event(3, EventCategory::Financial, ImpactLevel::Low, None),
    ];
    let summary = generate_case_summary(&events);

    assert_eq!(summary.recommendations.len(), 3);
    assert!(summary.recommendations[0].contains("Continue documenting"));
    assert!(summary.recommendations[1].contains("supporting evidence"));
    assert!(summary.recommendations[2].contains("Safety-related"));
}

#[test]
fn test_domestic_violence_code_triggers_safety_recommendation() {
    let mut event = create_test_event(1, EventCategory::Communication, ImpactLevel::Low, None);
    event.category = EventCategory::from("DOMESTIC_VIOLENCE".to_string());
    let summary = generate_case_summary(&[event]);

    assert!(summary
        .recommendations
        .iter()
        .any(|r| r.contains("Safety-related")));
}

#[test]
fn test_well_developed_timeline_recommendation() {
    let events: Vec<_> = (1..=10)
        .map(|day| {
            create_test_event(day, EventCategory::ParentingTime, ImpactLevel::Low, Some("log"))
        })
        .collect();
    let summary = generate_case_summary(&events);

    // Full evidence coverage and 10 events: only the chronology exhibit check fires.
    assert_eq!(summary.recommendations.len(), 1);
    assert!(summary.recommendations[0].contains("chronology exhibit"));
}

#[test]
fn test_no_recommendations_in_middle_band() {
    // 6 fully documented events, no safety categories: no check fires.
    let events: Vec<_> = (1..=6)
        .map(|day| {
            create_test_event(day, EventCategory::Financial, ImpactLevel::Low, Some("receipt"))
        })
        .collect();
    let summary = generate_case_summary(&events);

    assert!(summary.recommendations.is_empty());
}
