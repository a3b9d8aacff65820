//! Serialization tests for the API-facing types.
//!
//! Analytics consumers match on the exact JSON strings these types
//! produce, so the wire shapes are pinned here.

use chrono::NaiveDate;
use serde_json::json;

use legaldocs_rust::api::{CaseId, EventId, UserId};
use legaldocs_rust::models::{EventCategory, ImpactLevel, TimelineEvent};
use legaldocs_rust::routes::insights::{CaseInsights, CourtReadiness, DocumentationQuality};
use legaldocs_rust::routes::summary::{CaseSummary, ConcernPriority};

// =========================================================
// Identifier newtypes
// =========================================================

#[test]
fn test_ids_serialize_as_plain_integers() {
    assert_eq!(serde_json::to_string(&CaseId::new(7)).unwrap(), "7");
    assert_eq!(serde_json::to_string(&UserId::new(1)).unwrap(), "1");
    let id: EventId = serde_json::from_str("42").unwrap();
    assert_eq!(id.value(), 42);
}

#[test]
fn test_id_display() {
    assert_eq!(CaseId::new(9).to_string(), "9");
}

// =========================================================
// Category and impact wire formats
// =========================================================

#[test]
fn test_category_round_trips_as_code() {
    let json = serde_json::to_string(&EventCategory::SafetyConcern).unwrap();
    assert_eq!(json, "\"SAFETY_CONCERN\"");
    let back: EventCategory = serde_json::from_str(&json).unwrap();
    assert_eq!(back, EventCategory::SafetyConcern);
}

#[test]
fn test_unknown_category_is_preserved() {
    let parsed: EventCategory = serde_json::from_str("\"DOMESTIC_VIOLENCE\"").unwrap();
    assert_eq!(parsed, EventCategory::Other("DOMESTIC_VIOLENCE".to_string()));
    assert_eq!(parsed.label(), "Domestic Violence");
    assert_eq!(
        serde_json::to_string(&parsed).unwrap(),
        "\"DOMESTIC_VIOLENCE\""
    );
}

#[test]
fn test_impact_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ImpactLevel::Critical).unwrap(),
        "\"critical\""
    );
    let parsed: ImpactLevel = serde_json::from_str("\"high\"").unwrap();
    assert_eq!(parsed, ImpactLevel::High);
}

// =========================================================
// Insight labels
// =========================================================

#[test]
fn test_quality_and_readiness_wire_labels() {
    assert_eq!(
        serde_json::to_string(&DocumentationQuality::NeedsImprovement).unwrap(),
        "\"Needs Improvement\""
    );
    assert_eq!(
        serde_json::to_string(&CourtReadiness::PreparationPhase).unwrap(),
        "\"Preparation Phase\""
    );
}

#[test]
fn test_case_insights_shape() {
    let insights = CaseInsights {
        total_cases: 1,
        total_events: 3,
        priority_events: 1,
        documentation_quality: DocumentationQuality::Fair,
        court_readiness: CourtReadiness::PreparationPhase,
    };
    let value = serde_json::to_value(&insights).unwrap();
    assert_eq!(
        value,
        json!({
            "total_cases": 1,
            "total_events": 3,
            "priority_events": 1,
            "documentation_quality": "Fair",
            "court_readiness": "Preparation Phase",
        })
    );
}

// =========================================================
// Summary shapes
// =========================================================

#[test]
fn test_empty_summary_omits_date_range() {
    let summary = CaseSummary {
        total_events: 0,
        date_range: None,
        category_frequency: Default::default(),
        impact_frequency: Default::default(),
        key_concerns: vec![],
        recommendations: vec![],
    };
    let body = serde_json::to_string(&summary).unwrap();
    assert!(!body.contains("date_range"));
}

#[test]
fn test_concern_priority_labels() {
    assert_eq!(
        serde_json::to_string(&ConcernPriority::Critical).unwrap(),
        "\"critical\""
    );
    assert_eq!(
        serde_json::to_string(&ConcernPriority::High).unwrap(),
        "\"high\""
    );
}

// =========================================================
// Timeline event payloads
// =========================================================

#[test]
fn test_event_round_trip() {
    let event = TimelineEvent {
        id: Some(EventId::new(3)),
        case_id: CaseId::new(1),
        event_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        event_time: None,
        event_title: "Confrontation at exchange".to_string(),
        event_description: "Raised voices in front of the children".to_string(),
        category: EventCategory::SafetyConcern,
        evidence_type: Some("police_report".to_string()),
        impact_level: ImpactLevel::High,
        witness_present: true,
        police_called: true,
        created_at: chrono::Utc::now(),
    };

    let body = serde_json::to_string(&event).unwrap();
    assert!(body.contains("\"2024-02-10\""));
    assert!(body.contains("\"SAFETY_CONCERN\""));

    let back: TimelineEvent = serde_json::from_str(&body).unwrap();
    assert_eq!(back.event_title, event.event_title);
    assert!(back.is_priority());
}
