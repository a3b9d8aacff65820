//! Timeline event domain model.
//!
//! A timeline event is a single dated occurrence recorded for a case. Events
//! are immutable once created; all analytics read ordered event sequences.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{CaseId, EventId};

/// Category codes for timeline events.
///
/// The seven well-known codes get fixed human-readable labels. Codes outside
/// the known set are preserved verbatim in `Other` so they survive round
/// trips and fall back to a humanized label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    ParentingTime,
    ChildWellbeing,
    Communication,
    OrderCompliance,
    SafetyConcern,
    Financial,
    LegalEvent,
    Other(String),
}

impl EventCategory {
    /// The wire-format category code (upper snake case).
    pub fn code(&self) -> &str {
        match self {
            EventCategory::ParentingTime => "PARENTING_TIME",
            EventCategory::ChildWellbeing => "CHILD_WELLBEING",
            EventCategory::Communication => "COMMUNICATION",
            EventCategory::OrderCompliance => "ORDER_COMPLIANCE",
            EventCategory::SafetyConcern => "SAFETY_CONCERN",
            EventCategory::Financial => "FINANCIAL",
            EventCategory::LegalEvent => "LEGAL_EVENT",
            EventCategory::Other(code) => code,
        }
    }

    /// Human-readable label for display and frequency maps.
    ///
    /// Total: every code maps to a non-empty label. Unrecognized codes are
    /// humanized (underscores to spaces, each word capitalized).
    pub fn label(&self) -> String {
        match self {
            EventCategory::ParentingTime => "Parenting Time".to_string(),
            EventCategory::ChildWellbeing => "Child Well-Being".to_string(),
            EventCategory::Communication => "Communication".to_string(),
            EventCategory::OrderCompliance => "Order Compliance".to_string(),
            EventCategory::SafetyConcern => "Safety Concern".to_string(),
            EventCategory::Financial => "Financial".to_string(),
            EventCategory::LegalEvent => "Legal Event".to_string(),
            EventCategory::Other(code) => humanize_code(code),
        }
    }
}

impl From<String> for EventCategory {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PARENTING_TIME" => EventCategory::ParentingTime,
            "CHILD_WELLBEING" => EventCategory::ChildWellbeing,
            "COMMUNICATION" => EventCategory::Communication,
            "ORDER_COMPLIANCE" => EventCategory::OrderCompliance,
            "SAFETY_CONCERN" => EventCategory::SafetyConcern,
            "FINANCIAL" => EventCategory::Financial,
            "LEGAL_EVENT" => EventCategory::LegalEvent,
            _ => EventCategory::Other(code),
        }
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.code().to_string()
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Humanize a category code: underscores become spaces, words capitalize.
///
/// `"DOMESTIC_VIOLENCE"` -> `"Domestic Violence"`. An empty code humanizes
/// to an empty string, so callers should not pass empty codes.
pub fn humanize_code(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Severity classification of a timeline event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactLevel {
    /// Wire-format level string (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
            ImpactLevel::Critical => "critical",
        }
    }

    /// High or critical impact.
    pub fn is_elevated(&self) -> bool {
        matches!(self, ImpactLevel::High | ImpactLevel::Critical)
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated occurrence recorded for a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Database ID (None before insertion)
    pub id: Option<EventId>,
    /// Owning case
    pub case_id: CaseId,
    /// Calendar date of the event (required)
    pub event_date: NaiveDate,
    /// Optional clock time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<NaiveTime>,
    /// Short title
    pub event_title: String,
    /// Free-form description
    #[serde(default)]
    pub event_description: String,
    /// Category code
    pub category: EventCategory,
    /// Type of supporting evidence, if any (empty/None means undocumented)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_type: Option<String>,
    /// Severity classification
    pub impact_level: ImpactLevel,
    /// Whether a witness was present
    #[serde(default)]
    pub witness_present: bool,
    /// Whether police were called
    #[serde(default)]
    pub police_called: bool,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl TimelineEvent {
    /// Priority events are high/critical impact or involved police.
    pub fn is_priority(&self) -> bool {
        self.impact_level.is_elevated() || self.police_called
    }

    /// Whether the event carries a non-empty evidence type.
    pub fn has_evidence(&self) -> bool {
        self.evidence_type
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}
