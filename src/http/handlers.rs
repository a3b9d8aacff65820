//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint: it resolves the session,
//! loads data through the `db::services` layer, and runs the analytics
//! functions on the result. Case-scoped endpoints verify ownership first;
//! a case belonging to another user is reported as not found.

use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, StatusCode},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use super::auth::{clear_session_cookie, session_cookie, AuthUser, PasswordService};
use super::dto::{
    AuthResponse, CaseExport, CaseListResponse, CreateCaseRequest, CreateDocumentRequest,
    CreateEventRequest, DashboardResponse, DocumentListResponse, EventListResponse,
    HealthResponse, LoginRequest, MessageResponse, RegisterRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CaseId, CaseInfo, CaseInsights, CaseSummary, ChronologyEntry, EvidenceSummary,
    PatternAnalysis, UserId};
use crate::db::models::NewUser;
use crate::db::services as db_services;
use crate::models::{Case, Document, TimelineEvent, User};
use crate::routes;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for handlers that also set a session cookie.
type CookieResult<T> = Result<(StatusCode, [(axum::http::HeaderName, String); 1], Json<T>), AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Authentication
// =============================================================================

fn auth_response(user: &User) -> Result<AuthResponse, AppError> {
    let user_id = user
        .id
        .ok_or_else(|| AppError::Internal("User record missing ID".to_string()))?;
    Ok(AuthResponse {
        user_id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    })
}

/// POST /v1/auth/register
///
/// Create an account and log it in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> CookieResult<AuthResponse> {
    if request.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = PasswordService::hash_password(&request.password)?;
    let user = db_services::register_user(
        state.repository.as_ref(),
        NewUser {
            email: request.email,
            password_hash,
            first_name: request.first_name,
            last_name: request.last_name,
        },
    )
    .await?;

    let body = auth_response(&user)?;
    let token = state.sessions.create_session(body.user_id);
    info!(user_id = %body.user_id, "registered new user");

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, session_cookie(&token))],
        Json(body),
    ))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> CookieResult<AuthResponse> {
    let user = db_services::find_user_by_email(state.repository.as_ref(), &request.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    if !PasswordService::verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let body = auth_response(&user)?;
    let token = state.sessions.create_session(body.user_id);
    info!(user_id = %body.user_id, "user logged in");

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, session_cookie(&token))],
        Json(body),
    ))
}

/// POST /v1/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> CookieResult<MessageResponse> {
    state.sessions.revoke(&auth.token);
    Ok((
        StatusCode::OK,
        [(SET_COOKIE, clear_session_cookie())],
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}

// =============================================================================
// Cases
// =============================================================================

/// Load a case and verify it belongs to the logged-in user.
///
/// Another user's case is reported as not found rather than forbidden so
/// that case IDs are not enumerable.
async fn authorize_case(
    state: &AppState,
    user_id: UserId,
    case_id: CaseId,
) -> Result<Case, AppError> {
    let case = db_services::get_case(state.repository.as_ref(), case_id).await?;
    if case.user_id != user_id {
        return Err(AppError::NotFound(format!("Case {} not found", case_id)));
    }
    Ok(case)
}

/// GET /v1/cases
///
/// List the logged-in user's cases.
pub async fn list_cases(
    State(state): State<AppState>,
    auth: AuthUser,
) -> HandlerResult<CaseListResponse> {
    let cases = db_services::list_cases(state.repository.as_ref(), auth.user_id).await?;
    let cases: Vec<CaseInfo> = cases.iter().map(CaseInfo::from_case).collect();
    let total = cases.len();
    Ok(Json(CaseListResponse { cases, total }))
}

/// POST /v1/cases
pub async fn create_case(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<Case>), AppError> {
    let case = db_services::create_case(
        state.repository.as_ref(),
        request.into_new_case(auth.user_id),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(case)))
}

// =============================================================================
// Timeline Events
// =============================================================================

/// GET /v1/cases/{case_id}/events
///
/// List a case's events, oldest first.
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<EventListResponse> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    let total = events.len();
    Ok(Json(EventListResponse { events, total }))
}

/// POST /v1/cases/{case_id}/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<TimelineEvent>), AppError> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let event = db_services::create_timeline_event(
        state.repository.as_ref(),
        request.into_new_event(case_id),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

// =============================================================================
// Documents
// =============================================================================

/// GET /v1/cases/{case_id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<DocumentListResponse> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let documents = db_services::list_case_documents(state.repository.as_ref(), case_id).await?;
    let total = documents.len();
    Ok(Json(DocumentListResponse { documents, total }))
}

/// POST /v1/cases/{case_id}/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let document = db_services::store_document(
        state.repository.as_ref(),
        request.into_new_document(case_id),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(document)))
}

// =============================================================================
// Analytics Endpoints
// =============================================================================

/// GET /v1/cases/{case_id}/summary
pub async fn get_case_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<CaseSummary> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    info!(operation = routes::summary::GET_CASE_SUMMARY, %case_id, events = events.len());
    Ok(Json(services::generate_case_summary(&events)))
}

/// GET /v1/cases/{case_id}/patterns
pub async fn get_pattern_analysis(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<PatternAnalysis> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    info!(operation = routes::patterns::GET_PATTERN_ANALYSIS, %case_id, events = events.len());
    Ok(Json(services::analyze_patterns(&events)))
}

/// GET /v1/cases/{case_id}/evidence
pub async fn get_evidence_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<EvidenceSummary> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    info!(operation = routes::evidence::GET_EVIDENCE_SUMMARY, %case_id, events = events.len());
    Ok(Json(services::summarize_evidence(&events)))
}

/// GET /v1/cases/{case_id}/chronology
pub async fn get_chronology(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<Vec<ChronologyEntry>> {
    let case_id = CaseId::new(case_id);
    authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    info!(operation = routes::chronology::GET_CHRONOLOGY, %case_id, events = events.len());
    Ok(Json(services::build_chronology(&events)))
}

/// GET /v1/cases/{case_id}/export
///
/// Full court-preparation package: raw records plus every derived report.
pub async fn export_case(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(case_id): Path<i64>,
) -> HandlerResult<CaseExport> {
    let case_id = CaseId::new(case_id);
    let case = authorize_case(&state, auth.user_id, case_id).await?;
    let events = db_services::list_case_events(state.repository.as_ref(), case_id).await?;
    let documents = db_services::list_case_documents(state.repository.as_ref(), case_id).await?;

    Ok(Json(CaseExport {
        summary: services::generate_case_summary(&events),
        patterns: services::analyze_patterns(&events),
        evidence: services::summarize_evidence(&events),
        chronology: services::build_chronology(&events),
        case,
        events,
        documents,
        exported_at: Utc::now(),
    }))
}

/// GET /v1/insights
///
/// Cross-case readiness snapshot for the logged-in user.
pub async fn get_case_insights(
    State(state): State<AppState>,
    auth: AuthUser,
) -> HandlerResult<CaseInsights> {
    let cases = db_services::list_cases(state.repository.as_ref(), auth.user_id).await?;
    let events = db_services::list_user_events(state.repository.as_ref(), auth.user_id).await?;
    info!(operation = routes::insights::GET_CASE_INSIGHTS, cases = cases.len(), events = events.len());
    Ok(Json(services::compute_case_insights(cases.len(), &events)))
}

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardQuery {
    /// Number of recent events to include (default 5)
    #[serde(default)]
    pub recent: Option<usize>,
}

/// GET /v1/dashboard
///
/// Counters plus the most recent events across all of the user's cases.
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardResponse> {
    let cases = db_services::list_cases(state.repository.as_ref(), auth.user_id).await?;
    let events = db_services::list_user_events(state.repository.as_ref(), auth.user_id).await?;
    let priority_events = events.iter().filter(|e| e.is_priority()).count();
    let limit = query.recent.unwrap_or(5);
    let recent_events =
        db_services::recent_events(state.repository.as_ref(), auth.user_id, limit).await?;

    Ok(Json(DashboardResponse {
        total_cases: cases.len(),
        total_events: events.len(),
        priority_events,
        recent_events,
    }))
}
