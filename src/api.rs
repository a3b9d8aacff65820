//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::chronology::ChronologyEntry;
pub use crate::routes::evidence::EvidenceSummary;
pub use crate::routes::insights::CaseInsights;
pub use crate::routes::insights::CourtReadiness;
pub use crate::routes::insights::DocumentationQuality;
pub use crate::routes::landing::CaseInfo;
pub use crate::routes::patterns::EscalationIndicator;
pub use crate::routes::patterns::PatternAnalysis;
pub use crate::routes::summary::CaseSummary;
pub use crate::routes::summary::ConcernPriority;
pub use crate::routes::summary::DateRange;
pub use crate::routes::summary::KeyConcern;

use serde::{Deserialize, Serialize};

/// User identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Case identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CaseId(pub i64);

/// Timeline event identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

/// Document identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl CaseId {
    pub fn new(value: i64) -> Self {
        CaseId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl DocumentId {
    pub fn new(value: i64) -> Self {
        DocumentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CaseId> for i64 {
    fn from(id: CaseId) -> Self {
        id.0
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

pub use crate::models::{Case, Document, EventCategory, ImpactLevel, TimelineEvent, User};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_newtype_roundtrip() {
        let id = CaseId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = EventId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_user_id_ordering() {
        assert!(UserId::new(1) < UserId::new(2));
    }
}
