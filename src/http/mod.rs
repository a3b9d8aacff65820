//! HTTP server module.
//!
//! An axum-based REST API over the service layer and repository pattern.
//! Handlers authenticate via session cookies, load data through
//! `db::services`, and run the analytics in `services` on the result.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
