//! In-memory repository implementation.
//!
//! Backs the `local-repo` feature: a `HashMap`-based store behind a
//! `parking_lot` lock, suitable for tests and local development. IDs are
//! assigned from monotonically increasing counters, matching the serial
//! primary keys a relational backend would produce.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::{CaseId, DocumentId, EventId, UserId};
use crate::db::models::{NewCase, NewDocument, NewTimelineEvent, NewUser};
use crate::db::repository::{
    CaseRepository, DocumentRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult, TimelineRepository, UserRepository,
};
use crate::models::{Case, Document, TimelineEvent, User};

#[derive(Default)]
struct Store {
    users: HashMap<i64, User>,
    cases: HashMap<i64, Case>,
    events: HashMap<i64, TimelineEvent>,
    documents: HashMap<i64, Document>,
    next_user_id: i64,
    next_case_id: i64,
    next_event_id: i64,
    next_document_id: i64,
}

impl Store {
    fn case_exists(&self, case_id: CaseId) -> bool {
        self.cases.contains_key(&case_id.value())
    }
}

/// In-memory repository for unit testing and local development.
pub struct LocalRepository {
    inner: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store::default()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn insert_user(&self, new_user: NewUser) -> RepositoryResult<User> {
        let mut store = self.inner.write();

        let email_taken = store
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email));
        if email_taken {
            return Err(RepositoryError::validation_with_context(
                format!("User already exists: {}", new_user.email),
                ErrorContext::new("insert_user").with_entity("user"),
            ));
        }

        store.next_user_id += 1;
        let id = store.next_user_id;
        let user = User {
            id: Some(UserId::new(id)),
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            subscription_tier: "basic".to_string(),
            created_at: Utc::now(),
        };
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User> {
        let store = self.inner.read();
        store.users.get(&user_id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("User {} not found", user_id),
                ErrorContext::new("get_user")
                    .with_entity("user")
                    .with_entity_id(user_id),
            )
        })
    }

    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let store = self.inner.read();
        Ok(store
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl CaseRepository for LocalRepository {
    async fn insert_case(&self, new_case: NewCase) -> RepositoryResult<Case> {
        let mut store = self.inner.write();

        if !store.users.contains_key(&new_case.user_id.value()) {
            return Err(RepositoryError::not_found_with_context(
                format!("User {} not found", new_case.user_id),
                ErrorContext::new("insert_case")
                    .with_entity("user")
                    .with_entity_id(new_case.user_id),
            ));
        }

        store.next_case_id += 1;
        let id = store.next_case_id;
        let case = Case {
            id: Some(CaseId::new(id)),
            user_id: new_case.user_id,
            case_title: new_case.case_title,
            case_focus: new_case.case_focus,
            legal_domain: new_case.legal_domain,
            created_at: Utc::now(),
        };
        store.cases.insert(id, case.clone());
        Ok(case)
    }

    async fn get_case(&self, case_id: CaseId) -> RepositoryResult<Case> {
        let store = self.inner.read();
        store.cases.get(&case_id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Case {} not found", case_id),
                ErrorContext::new("get_case")
                    .with_entity("case")
                    .with_entity_id(case_id),
            )
        })
    }

    async fn list_cases_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<Case>> {
        let store = self.inner.read();
        let mut cases: Vec<Case> = store
            .cases
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        cases.sort_by_key(|c| c.id);
        Ok(cases)
    }
}

#[async_trait]
impl TimelineRepository for LocalRepository {
    async fn insert_event(&self, new_event: NewTimelineEvent) -> RepositoryResult<TimelineEvent> {
        let mut store = self.inner.write();

        if !store.case_exists(new_event.case_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Case {} not found", new_event.case_id),
                ErrorContext::new("insert_event")
                    .with_entity("case")
                    .with_entity_id(new_event.case_id),
            ));
        }

        store.next_event_id += 1;
        let id = store.next_event_id;
        let event = TimelineEvent {
            id: Some(EventId::new(id)),
            case_id: new_event.case_id,
            event_date: new_event.event_date,
            event_time: new_event.event_time,
            event_title: new_event.event_title,
            event_description: new_event.event_description,
            category: new_event.category,
            evidence_type: new_event.evidence_type,
            impact_level: new_event.impact_level,
            witness_present: new_event.witness_present,
            police_called: new_event.police_called,
            created_at: Utc::now(),
        };
        store.events.insert(id, event.clone());
        Ok(event)
    }

    async fn list_events_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<TimelineEvent>> {
        let store = self.inner.read();
        let mut events: Vec<TimelineEvent> = store
            .events
            .values()
            .filter(|e| e.case_id == case_id)
            .cloned()
            .collect();
        // Insertion order breaks ties so listings are stable across calls.
        events.sort_by_key(|e| (e.event_date, e.id));
        Ok(events)
    }

    async fn list_events_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<TimelineEvent>> {
        let store = self.inner.read();
        let case_ids: Vec<i64> = store
            .cases
            .values()
            .filter(|c| c.user_id == user_id)
            .filter_map(|c| c.id.map(|id| id.value()))
            .collect();
        let mut events: Vec<TimelineEvent> = store
            .events
            .values()
            .filter(|e| case_ids.contains(&e.case_id.value()))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.event_date, e.id));
        Ok(events)
    }
}

#[async_trait]
impl DocumentRepository for LocalRepository {
    async fn insert_document(&self, new_document: NewDocument) -> RepositoryResult<Document> {
        let mut store = self.inner.write();

        if !store.case_exists(new_document.case_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Case {} not found", new_document.case_id),
                ErrorContext::new("insert_document")
                    .with_entity("case")
                    .with_entity_id(new_document.case_id),
            ));
        }

        store.next_document_id += 1;
        let id = store.next_document_id;
        let document = Document {
            id: Some(DocumentId::new(id)),
            case_id: new_document.case_id,
            filename: new_document.filename,
            original_filename: new_document.original_filename,
            document_type: new_document.document_type,
            file_size: new_document.file_size,
            evidence_category: new_document.evidence_category,
            upload_date: Utc::now(),
        };
        store.documents.insert(id, document.clone());
        Ok(document)
    }

    async fn list_documents_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<Document>> {
        let store = self.inner.read();
        let mut documents: Vec<Document> = store
            .documents
            .values()
            .filter(|d| d.case_id == case_id)
            .cloned()
            .collect();
        documents.sort_by_key(|d| d.id);
        Ok(documents)
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
