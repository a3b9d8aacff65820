//! Insert payloads for repository operations.
//!
//! These carry caller-supplied fields; IDs and creation timestamps are
//! assigned by the repository on insert.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::api::{CaseId, UserId};
use crate::models::{EventCategory, ImpactLevel};

/// Payload for registering a user. The password is already hashed by the
/// auth layer before it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Payload for creating a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCase {
    pub user_id: UserId,
    pub case_title: String,
    #[serde(default = "default_case_focus")]
    pub case_focus: String,
    #[serde(default = "default_legal_domain")]
    pub legal_domain: String,
}

pub(crate) fn default_case_focus() -> String {
    "CUSTODY_PARENTING".to_string()
}

pub(crate) fn default_legal_domain() -> String {
    "FAMILY_LAW".to_string()
}

/// Payload for recording a timeline event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimelineEvent {
    pub case_id: CaseId,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub event_time: Option<NaiveTime>,
    pub event_title: String,
    #[serde(default)]
    pub event_description: String,
    #[serde(default = "default_category")]
    pub category: EventCategory,
    #[serde(default)]
    pub evidence_type: Option<String>,
    #[serde(default = "default_impact_level")]
    pub impact_level: ImpactLevel,
    #[serde(default)]
    pub witness_present: bool,
    #[serde(default)]
    pub police_called: bool,
}

pub(crate) fn default_category() -> EventCategory {
    EventCategory::ParentingTime
}

pub(crate) fn default_impact_level() -> ImpactLevel {
    ImpactLevel::Medium
}

/// Payload for attaching document metadata to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub case_id: CaseId,
    pub filename: String,
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub evidence_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_deserializes_with_defaults() {
        let json = r#"{
            "case_id": 1,
            "event_date": "2024-01-05",
            "event_title": "Missed exchange"
        }"#;
        let event: NewTimelineEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, EventCategory::ParentingTime);
        assert_eq!(event.impact_level, ImpactLevel::Medium);
        assert!(!event.witness_present);
        assert!(!event.police_called);
        assert!(event.evidence_type.is_none());
    }

    #[test]
    fn test_new_case_defaults() {
        let json = r#"{"user_id": 1, "case_title": "Custody matter"}"#;
        let case: NewCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.case_focus, "CUSTODY_PARENTING");
        assert_eq!(case.legal_domain, "FAMILY_LAW");
    }
}
