//! Service layer for derived analytics.
//!
//! Pure functions consuming ordered sequences of timeline events and
//! producing derived summaries, pattern flags, evidence scores, and
//! chronology. No side effects; handlers load events through the repository
//! and pass them in.

pub mod chronology;

pub mod evidence;

pub mod insights;

pub mod patterns;

pub mod summary;

pub use chronology::build_chronology;
pub use evidence::summarize_evidence;
pub use insights::compute_case_insights;
pub use patterns::analyze_patterns;
pub use summary::generate_case_summary;


#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
