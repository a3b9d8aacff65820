//! Data access service layer.
//!
//! Thin async functions over the repository traits. Handlers call these
//! instead of the repository directly so that validation and cross-entity
//! rules live in one place. Every function takes the repository explicitly;
//! callers decide which backend to inject.

use crate::api::{CaseId, UserId};
use crate::db::models::{NewCase, NewDocument, NewTimelineEvent, NewUser};
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Case, Document, TimelineEvent, User};

/// Register a new user account.
///
/// # Errors
/// Returns a validation error when the email is blank or already registered.
pub async fn register_user(repo: &dyn FullRepository, new_user: NewUser) -> RepositoryResult<User> {
    if new_user.email.trim().is_empty() {
        return Err(RepositoryError::validation("Email must not be empty"));
    }
    repo.insert_user(new_user).await
}

/// Fetch a user account by ID.
pub async fn get_user(repo: &dyn FullRepository, user_id: UserId) -> RepositoryResult<User> {
    repo.get_user(user_id).await
}

/// Look up a user by login email. `Ok(None)` when no account exists.
pub async fn find_user_by_email(
    repo: &dyn FullRepository,
    email: &str,
) -> RepositoryResult<Option<User>> {
    repo.find_user_by_email(email).await
}

/// Create a case for a user.
///
/// # Errors
/// Returns a validation error when the title is blank.
pub async fn create_case(repo: &dyn FullRepository, new_case: NewCase) -> RepositoryResult<Case> {
    if new_case.case_title.trim().is_empty() {
        return Err(RepositoryError::validation("Case title must not be empty"));
    }
    repo.insert_case(new_case).await
}

/// Fetch a case by ID.
pub async fn get_case(repo: &dyn FullRepository, case_id: CaseId) -> RepositoryResult<Case> {
    repo.get_case(case_id).await
}

/// List all cases owned by a user, oldest first.
pub async fn list_cases(repo: &dyn FullRepository, user_id: UserId) -> RepositoryResult<Vec<Case>> {
    repo.list_cases_for_user(user_id).await
}

/// Record a timeline event on a case.
///
/// # Errors
/// Returns a validation error when the title is blank, or a not found error
/// when the case does not exist.
pub async fn create_timeline_event(
    repo: &dyn FullRepository,
    new_event: NewTimelineEvent,
) -> RepositoryResult<TimelineEvent> {
    if new_event.event_title.trim().is_empty() {
        return Err(RepositoryError::validation("Event title must not be empty"));
    }
    repo.insert_event(new_event).await
}

/// List a case's events ordered ascending by event date.
pub async fn list_case_events(
    repo: &dyn FullRepository,
    case_id: CaseId,
) -> RepositoryResult<Vec<TimelineEvent>> {
    repo.list_events_for_case(case_id).await
}

/// List all events across a user's cases, ordered ascending by date.
pub async fn list_user_events(
    repo: &dyn FullRepository,
    user_id: UserId,
) -> RepositoryResult<Vec<TimelineEvent>> {
    repo.list_events_for_user(user_id).await
}

/// The most recent events across a user's cases, newest first.
pub async fn recent_events(
    repo: &dyn FullRepository,
    user_id: UserId,
    limit: usize,
) -> RepositoryResult<Vec<TimelineEvent>> {
    let mut events = repo.list_events_for_user(user_id).await?;
    events.reverse();
    events.truncate(limit);
    Ok(events)
}

/// Attach document metadata to a case.
pub async fn store_document(
    repo: &dyn FullRepository,
    new_document: NewDocument,
) -> RepositoryResult<Document> {
    if new_document.filename.trim().is_empty() {
        return Err(RepositoryError::validation("Filename must not be empty"));
    }
    repo.insert_document(new_document).await
}

/// List a case's documents, oldest upload first.
pub async fn list_case_documents(
    repo: &dyn FullRepository,
    case_id: CaseId,
) -> RepositoryResult<Vec<Document>> {
    repo.list_documents_for_case(case_id).await
}

/// Verify the storage backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
