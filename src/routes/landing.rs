use serde::{Deserialize, Serialize};

use crate::api::CaseId;

// =========================================================
// Case listing types
// =========================================================

/// Lightweight case row for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInfo {
    pub case_id: CaseId,
    pub case_title: String,
    pub case_focus: String,
}

impl CaseInfo {
    /// Build a listing row from a stored case.
    ///
    /// Cases returned by the repository always carry an ID; a missing one
    /// maps to 0 rather than dropping the row.
    pub fn from_case(case: &crate::models::Case) -> Self {
        Self {
            case_id: case.id.unwrap_or(CaseId::new(0)),
            case_title: case.case_title.clone(),
            case_focus: case.case_focus.clone(),
        }
    }
}

/// Route function name constants for case CRUD
pub const LIST_CASES: &str = "list_cases";
pub const POST_CASE: &str = "create_case";
