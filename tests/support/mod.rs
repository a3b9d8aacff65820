//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;

use legaldocs_rust::api::{CaseId, UserId};
use legaldocs_rust::db::models::{NewCase, NewTimelineEvent, NewUser};
use legaldocs_rust::db::repositories::LocalRepository;
use legaldocs_rust::db::services;
use legaldocs_rust::models::{Case, EventCategory, ImpactLevel, TimelineEvent, User};

/// Register a user with a fixed password hash.
pub async fn seed_user(repo: &LocalRepository, email: &str) -> User {
    services::register_user(
        repo,
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$12$test.hash.placeholder".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        },
    )
    .await
    .expect("seed user")
}

/// Create a case with default focus and domain.
pub async fn seed_case(repo: &LocalRepository, user_id: UserId, title: &str) -> Case {
    services::create_case(
        repo,
        NewCase {
            user_id,
            case_title: title.to_string(),
            case_focus: "CUSTODY_PARENTING".to_string(),
            legal_domain: "FAMILY_LAW".to_string(),
        },
    )
    .await
    .expect("seed case")
}

/// Builder for event insert payloads with sensible defaults.
pub struct EventBuilder {
    payload: NewTimelineEvent,
}

impl EventBuilder {
    pub fn new(case_id: CaseId, date: NaiveDate, title: &str) -> Self {
        Self {
            payload: NewTimelineEvent {
                case_id,
                event_date: date,
                event_time: None,
                event_title: title.to_string(),
                event_description: String::new(),
                category: EventCategory::Communication,
                evidence_type: None,
                impact_level: ImpactLevel::Low,
                witness_present: false,
                police_called: false,
            },
        }
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.payload.category = category;
        self
    }

    pub fn impact(mut self, level: ImpactLevel) -> Self {
        self.payload.impact_level = level;
        self
    }

    pub fn evidence(mut self, evidence_type: &str) -> Self {
        self.payload.evidence_type = Some(evidence_type.to_string());
        self
    }

    pub fn witness(mut self) -> Self {
        self.payload.witness_present = true;
        self
    }

    pub fn police(mut self) -> Self {
        self.payload.police_called = true;
        self
    }

    pub fn build(self) -> NewTimelineEvent {
        self.payload
    }

    pub async fn insert(self, repo: &LocalRepository) -> TimelineEvent {
        services::create_timeline_event(repo, self.payload)
            .await
            .expect("insert event")
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in &self.snapshot {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }
}
