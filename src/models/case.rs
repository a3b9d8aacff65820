//! User, case, and document domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{CaseId, DocumentId, UserId};

/// A registered account.
///
/// The password hash is opaque to this layer; hashing and verification live
/// in the HTTP auth module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Database ID (None before insertion)
    pub id: Option<UserId>,
    /// Unique login email
    pub email: String,
    /// Password hash (never the plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Subscription tier, defaults to "basic"
    pub subscription_tier: String,
    pub created_at: DateTime<Utc>,
}

/// A legal case owned by a user; cases own timeline events and documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Database ID (None before insertion)
    pub id: Option<CaseId>,
    /// Owning user
    pub user_id: UserId,
    pub case_title: String,
    /// Case focus, e.g. "CUSTODY_PARENTING"
    pub case_focus: String,
    /// Backend categorization, defaults to "FAMILY_LAW"
    pub legal_domain: String,
    pub created_at: DateTime<Utc>,
}

/// Document metadata attached to a case. Blob storage is out of scope;
/// only the metadata row is tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Database ID (None before insertion)
    pub id: Option<DocumentId>,
    /// Owning case
    pub case_id: CaseId,
    pub filename: String,
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub evidence_category: String,
    pub upload_date: DateTime<Utc>,
}
