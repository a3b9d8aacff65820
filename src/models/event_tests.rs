use chrono::{NaiveDate, Utc};

use crate::api::CaseId;
use crate::models::{humanize_code, EventCategory, ImpactLevel, TimelineEvent};

fn event(category: EventCategory, impact: ImpactLevel) -> TimelineEvent {
    TimelineEvent {
        id: None,
        case_id: CaseId::new(1),
        event_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        event_time: None,
        event_title: "test".to_string(),
        event_description: String::new(),
        category,
        evidence_type: None,
        impact_level: impact,
        witness_present: false,
        police_called: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_known_category_labels() {
    assert_eq!(EventCategory::ParentingTime.label(), "Parenting Time");
    assert_eq!(EventCategory::ChildWellbeing.label(), "Child Well-Being");
    assert_eq!(EventCategory::Communication.label(), "Communication");
    assert_eq!(EventCategory::OrderCompliance.label(), "Order Compliance");
    assert_eq!(EventCategory::SafetyConcern.label(), "Safety Concern");
    assert_eq!(EventCategory::Financial.label(), "Financial");
    assert_eq!(EventCategory::LegalEvent.label(), "Legal Event");
}

#[test]
fn test_unknown_category_humanizes() {
    let category = EventCategory::from("DOMESTIC_VIOLENCE".to_string());
    assert_eq!(category, EventCategory::Other("DOMESTIC_VIOLENCE".to_string()));
    assert_eq!(category.label(), "Domestic Violence");
}

#[test]
fn test_label_mapping_is_total() {
    let codes = [
        "PARENTING_TIME",
        "CHILD_WELLBEING",
        "COMMUNICATION",
        "ORDER_COMPLIANCE",
        "SAFETY_CONCERN",
        "FINANCIAL",
        "LEGAL_EVENT",
        "DOMESTIC_VIOLENCE",
        "SOME_FUTURE_CODE",
        "single",
    ];
    for code in codes {
        let label = EventCategory::from(code.to_string()).label();
        assert!(!label.is_empty(), "empty label for code {}", code);
    }
}

#[test]
fn test_humanize_code() {
    assert_eq!(humanize_code("DOMESTIC_VIOLENCE"), "Domestic Violence");
    assert_eq!(humanize_code("single"), "Single");
    assert_eq!(humanize_code("A__B"), "A B");
}

#[test]
fn test_category_serde_roundtrip() {
    let json = serde_json::to_string(&EventCategory::SafetyConcern).unwrap();
    assert_eq!(json, "\"SAFETY_CONCERN\"");
    let back: EventCategory = serde_json::from_str("\"CUSTOM_CODE\"").unwrap();
    assert_eq!(back, EventCategory::Other("CUSTOM_CODE".to_string()));
}

#[test]
fn test_impact_level_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&ImpactLevel::Critical).unwrap(), "\"critical\"");
    let level: ImpactLevel = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(level, ImpactLevel::Medium);
}

#[test]
fn test_priority_event_rules() {
    assert!(!event(EventCategory::Communication, ImpactLevel::Low).is_priority());
    assert!(event(EventCategory::Communication, ImpactLevel::High).is_priority());
    assert!(event(EventCategory::Communication, ImpactLevel::Critical).is_priority());

    let mut police = event(EventCategory::Communication, ImpactLevel::Low);
    police.police_called = true;
    assert!(police.is_priority());
}

#[test]
fn test_has_evidence_ignores_empty_strings() {
    let mut e = event(EventCategory::Financial, ImpactLevel::Low);
    assert!(!e.has_evidence());
    e.evidence_type = Some(String::new());
    assert!(!e.has_evidence());
    e.evidence_type = Some("photo".to_string());
    assert!(e.has_evidence());
}
