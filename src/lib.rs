//! # LegalDocs Rust Backend
//!
//! Case-management backend for tracking dated timeline events on legal cases.
//!
//! This crate provides a Rust backend for the LegalDocs case-preparation
//! system. It stores users, cases, timeline events, and document metadata
//! behind a repository abstraction, and derives court-preparation analytics
//! (case summaries, pattern flags, evidence-quality scoring, chronology)
//! from the recorded events. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Case tracking**: Users own cases; cases own dated timeline events
//! - **Analytics**: Pure single-pass aggregations over ordered event
//!   sequences (insights, summaries, patterns, evidence scores, chronology)
//! - **HTTP API**: RESTful endpoints with session-cookie authentication
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTO re-exports for API responses
//! - [`models`]: Domain entities and enumerations
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`services`]: Pure analytics functions over event sequences
//! - [`routes`]: Route-specific result record types
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
