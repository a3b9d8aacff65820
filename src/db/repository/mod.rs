//! Repository trait definitions.
//!
//! The persistence interface is split per entity so storage backends can be
//! swapped without touching business logic. `FullRepository` combines the
//! per-entity traits and is what handlers and services depend on.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync` to work with async Rust.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{CaseId, UserId};
use crate::db::models::{NewCase, NewDocument, NewTimelineEvent, NewUser};
use crate::models::{Case, Document, TimelineEvent, User};

/// Repository trait for user account operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns a validation error if the email is already registered.
    async fn insert_user(&self, new_user: NewUser) -> RepositoryResult<User>;

    /// Fetch a user by ID.
    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User>;

    /// Look up a user by login email. `Ok(None)` when no account exists.
    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Repository trait for case operations.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Insert a new case and return it with its assigned ID.
    async fn insert_case(&self, new_case: NewCase) -> RepositoryResult<Case>;

    /// Fetch a case by ID.
    async fn get_case(&self, case_id: CaseId) -> RepositoryResult<Case>;

    /// List all cases owned by a user, oldest first.
    async fn list_cases_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<Case>>;
}

/// Repository trait for timeline event operations.
///
/// Events are immutable once created; there are no update or delete
/// operations.
#[async_trait]
pub trait TimelineRepository: Send + Sync {
    /// Insert a new timeline event and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns a not found error if the owning case does not exist.
    async fn insert_event(&self, new_event: NewTimelineEvent) -> RepositoryResult<TimelineEvent>;

    /// List a case's events ordered ascending by event date.
    ///
    /// Date ordering must be established here: pattern and escalation
    /// analysis depends on it.
    async fn list_events_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<TimelineEvent>>;

    /// List all events across a user's cases, ordered ascending by date.
    async fn list_events_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<TimelineEvent>>;
}

/// Repository trait for document metadata operations.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert document metadata and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns a not found error if the owning case does not exist.
    async fn insert_document(&self, new_document: NewDocument) -> RepositoryResult<Document>;

    /// List a case's documents, oldest upload first.
    async fn list_documents_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<Document>>;
}

/// Combined repository interface used by handlers and the service layer.
#[async_trait]
pub trait FullRepository:
    UserRepository + CaseRepository + TimelineRepository + DocumentRepository
{
    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
