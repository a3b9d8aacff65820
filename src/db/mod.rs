//! Data access layer.
//!
//! Structured around the repository pattern:
//! - `repository`: trait definitions and error types
//! - `repositories`: backend implementations (in-memory local store)
//! - `models`: insert payloads
//! - `services`: validated operations over the traits
//! - `factory` / `repo_config`: backend selection at startup
//!
//! A repository instance is created once at startup and injected wherever
//! it is needed; there is no process-global handle.

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    CaseRepository, DocumentRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult, TimelineRepository, UserRepository,
};
