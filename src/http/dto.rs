//! Data Transfer Objects for the HTTP API.
//!
//! Request/response bodies for the REST endpoints. Analytics result types
//! are re-exported from the routes module since they already derive
//! Serialize/Deserialize.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export result records that are already serializable.
pub use crate::api::{
    // Chronology
    ChronologyEntry,
    // Insights
    CaseInsights,
    // Landing
    CaseInfo,
    // Summary
    CaseSummary,
    // Evidence
    EvidenceSummary,
    // Patterns
    PatternAnalysis,
};
use crate::api::{CaseId, UserId};
use crate::db::models::{
    default_case_focus, default_category, default_impact_level, default_legal_domain,
    NewCase, NewDocument, NewTimelineEvent,
};
use crate::models::{Case, Document, EventCategory, ImpactLevel, TimelineEvent};

/// Request body for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Request body for logging in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for successful register/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Request body for creating a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCaseRequest {
    pub case_title: String,
    #[serde(default = "default_case_focus")]
    pub case_focus: String,
    #[serde(default = "default_legal_domain")]
    pub legal_domain: String,
}

impl CreateCaseRequest {
    pub fn into_new_case(self, user_id: UserId) -> NewCase {
        NewCase {
            user_id,
            case_title: self.case_title,
            case_focus: self.case_focus,
            legal_domain: self.legal_domain,
        }
    }
}

/// Response listing a user's cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseListResponse {
    pub cases: Vec<CaseInfo>,
    pub total: usize,
}

/// Request body for recording a timeline event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
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

impl CreateEventRequest {
    pub fn into_new_event(self, case_id: CaseId) -> NewTimelineEvent {
        NewTimelineEvent {
            case_id,
            event_date: self.event_date,
            event_time: self.event_time,
            event_title: self.event_title,
            event_description: self.event_description,
            category: self.category,
            evidence_type: self.evidence_type,
            impact_level: self.impact_level,
            witness_present: self.witness_present,
            police_called: self.police_called,
        }
    }
}

/// Response listing a case's events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<TimelineEvent>,
    pub total: usize,
}

/// Request body for attaching document metadata to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
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

impl CreateDocumentRequest {
    pub fn into_new_document(self, case_id: CaseId) -> NewDocument {
        NewDocument {
            case_id,
            filename: self.filename,
            original_filename: self.original_filename,
            document_type: self.document_type,
            file_size: self.file_size,
            evidence_category: self.evidence_category,
        }
    }
}

/// Response listing a case's documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
    pub total: usize,
}

/// Dashboard overview for the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_cases: usize,
    pub total_events: usize,
    pub priority_events: usize,
    pub recent_events: Vec<TimelineEvent>,
}

/// Full export package for a case: raw records plus every derived report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseExport {
    pub case: Case,
    pub events: Vec<TimelineEvent>,
    pub documents: Vec<Document>,
    pub summary: CaseSummary,
    pub patterns: PatternAnalysis,
    pub evidence: EvidenceSummary,
    pub chronology: Vec<ChronologyEntry>,
    pub exported_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
