//! # API REST
//!
//! REST API implementation for Axiom.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and `axiom-core` for triage logic.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessReq, AssessRes, CreateTriageRecordReq, HealthRes, HealthService, ListTriageRecordsRes,
    TriageRecordRes, VocabularyRes,
};
use axiom_core::{
    CoreConfig, DurationDays, SeverityLevel, SymptomSet, TriageAssessment, TriageClassifier,
    TriageError, TriageHistoryService, TriageResult,
};

/// Application state for the REST API server
///
/// Shared by all request handlers. Cloning is cheap; the history store is shared between
/// clones.
#[derive(Clone)]
pub struct AppState {
    classifier: TriageClassifier,
    history_service: TriageHistoryService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            classifier: TriageClassifier::new(),
            history_service: TriageHistoryService::new(cfg),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        vocabulary,
        assess,
        list_triage_records,
        create_triage_record,
        get_triage_record,
    ),
    components(schemas(
        HealthRes,
        VocabularyRes,
        AssessReq,
        AssessRes,
        CreateTriageRecordReq,
        TriageRecordRes,
        ListTriageRecordsRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/triage/vocabulary", get(vocabulary))
        .route("/triage/assess", post(assess))
        .route(
            "/api/triage/:user_id",
            get(list_triage_records).post(create_triage_record),
        )
        .route("/api/triage/:user_id/:record_id", get(get_triage_record))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Validates a stored-record request into an assessment.
fn parse_record_request(req: &CreateTriageRecordReq) -> TriageResult<TriageAssessment> {
    Ok(TriageAssessment::new(
        SymptomSet::parse_list(&req.symptoms)?,
        SeverityLevel::parse_token(&req.severity_level)?,
        DurationDays::new(req.duration_days)?,
    ))
}

/// Maps a core error to a response status and a client-safe message.
fn error_response(err: TriageError) -> (StatusCode, &'static str) {
    match err {
        TriageError::InvalidInput(msg) => {
            tracing::warn!("Rejected triage input: {}", msg);
            (StatusCode::BAD_REQUEST, "Invalid triage input")
        }
        TriageError::RecordNotFound { user_id, record_id } => {
            tracing::warn!("Triage record {} not found for user {}", record_id, user_id);
            (StatusCode::NOT_FOUND, "Triage record not found")
        }
        e @ TriageError::StoreUnavailable => {
            tracing::error!("Triage history error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/triage/vocabulary",
    responses(
        (status = 200, description = "Accepted symptoms, severity levels and duration bounds", body = VocabularyRes)
    )
)]
#[axum::debug_handler]
async fn vocabulary(State(_state): State<AppState>) -> Json<VocabularyRes> {
    Json(VocabularyRes::current())
}

#[utoipa::path(
    post,
    path = "/triage/assess",
    request_body = AssessReq,
    responses(
        (status = 200, description = "Triage verdict", body = AssessRes),
        (status = 400, description = "Bad request")
    )
)]
/// Classify an assessment without storing it
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - no symptoms are given, or a symptom is not in the vocabulary,
/// - the severity level is missing or unrecognised, or
/// - the duration is outside 1 to 14 days.
#[axum::debug_handler]
async fn assess(
    State(state): State<AppState>,
    Json(req): Json<AssessReq>,
) -> Result<Json<AssessRes>, (StatusCode, &'static str)> {
    let verdict = state
        .classifier
        .classify_tokens(&req.symptoms, &req.severity_level, req.duration_days)
        .map_err(error_response)?;
    Ok(Json(AssessRes::from(&verdict)))
}

#[utoipa::path(
    get,
    path = "/api/triage/{user_id}",
    params(("user_id" = u64, Path, description = "User whose history to list")),
    responses(
        (status = 200, description = "Triage history, newest first", body = ListTriageRecordsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List a user's triage records, newest first
#[axum::debug_handler]
async fn list_triage_records(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<ListTriageRecordsRes>, (StatusCode, &'static str)> {
    let records = state
        .history_service
        .list_for_user(user_id)
        .map_err(error_response)?;
    Ok(Json(ListTriageRecordsRes {
        records: records.iter().map(TriageRecordRes::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/triage/{user_id}",
    params(("user_id" = u64, Path, description = "User submitting the assessment")),
    request_body = CreateTriageRecordReq,
    responses(
        (status = 201, description = "Triage record created", body = TriageRecordRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Classify an assessment and store it in the user's history
///
/// The recommendation is computed by the server from the submitted inputs.
///
/// # Errors
/// Returns `400 Bad Request` for invalid inputs and `500 Internal Server Error` if the history
/// store cannot be written.
#[axum::debug_handler]
async fn create_triage_record(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(req): Json<CreateTriageRecordReq>,
) -> Result<(StatusCode, Json<TriageRecordRes>), (StatusCode, &'static str)> {
    let assessment = parse_record_request(&req).map_err(error_response)?;

    let record = state
        .history_service
        .record(user_id, assessment)
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(TriageRecordRes::from(&record))))
}

#[utoipa::path(
    get,
    path = "/api/triage/{user_id}/{record_id}",
    params(
        ("user_id" = u64, Path, description = "Owner of the record"),
        ("record_id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Triage record", body = TriageRecordRes),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Not found")
    )
)]
#[axum::debug_handler]
async fn get_triage_record(
    State(state): State<AppState>,
    Path((user_id, record_id)): Path<(u64, String)>,
) -> Result<Json<TriageRecordRes>, (StatusCode, &'static str)> {
    let record_id = match uuid::Uuid::parse_str(&record_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid triage record id: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid triage record id"));
        }
    };

    let record = state
        .history_service
        .get(user_id, record_id)
        .map_err(error_response)?;
    Ok(Json(TriageRecordRes::from(&record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Arc::new(CoreConfig::default())))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health_reports_alive() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let res: HealthRes = serde_json::from_slice(&body).unwrap();
        assert!(res.ok);
    }

    #[tokio::test]
    async fn test_assess_returns_emergency_for_red_flag() {
        let (status, body) = send(
            app(),
            "POST",
            "/triage/assess",
            Some(json!({"symptoms": ["Chest Pain"], "severity_level": "Moderate", "duration_days": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: AssessRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.tier, "emergency");
        assert_eq!(res.color, "#B71C1C");
    }

    #[tokio::test]
    async fn test_assess_rejects_empty_symptoms() {
        let (status, _) = send(
            app(),
            "POST",
            "/triage/assess",
            Some(json!({"symptoms": [], "severity_level": "Mild", "duration_days": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assess_rejects_unselected_severity() {
        let (status, _) = send(
            app(),
            "POST",
            "/triage/assess",
            Some(json!({"symptoms": ["Fever"], "severity_level": "", "duration_days": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_created_records_are_listed_newest_first() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/triage/42",
            Some(json!({"symptoms": "Fever", "severity_level": "Mild", "duration_days": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let first: TriageRecordRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(first.recommendation, "Schedule an appointment with a doctor");

        let (_, body) = send(
            app.clone(),
            "POST",
            "/api/triage/42",
            Some(json!({"symptoms": "Headache, Cough", "severity_level": "Mild", "duration_days": 2})),
        )
        .await;
        let second: TriageRecordRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(second.symptoms, "Cough, Headache");
        assert_eq!(second.tier, "self_care");

        let (status, body) = send(app, "GET", "/api/triage/42", None).await;
        assert_eq!(status, StatusCode::OK);
        let list: ListTriageRecordsRes = serde_json::from_slice(&body).unwrap();
        let ids: Vec<&str> = list.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn test_get_triage_record_by_id() {
        let app = app();
        let (_, body) = send(
            app.clone(),
            "POST",
            "/api/triage/5",
            Some(json!({"symptoms": "Nausea", "severity_level": "Moderate", "duration_days": 3})),
        )
        .await;
        let created: TriageRecordRes = serde_json::from_slice(&body).unwrap();

        let (status, body) =
            send(app.clone(), "GET", &format!("/api/triage/5/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: TriageRecordRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);

        let (status, _) = send(app.clone(), "GET", &format!("/api/triage/6/{}", created.id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app, "GET", "/api/triage/5/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_triage_record_rejects_unknown_symptom() {
        let (status, _) = send(
            app(),
            "POST",
            "/api/triage/1",
            Some(json!({"symptoms": "Fever, Rash", "severity_level": "Mild", "duration_days": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_vocabulary_lists_symptoms() {
        let (status, body) = send(app(), "GET", "/api/triage/vocabulary", None).await;
        assert_eq!(status, StatusCode::OK);
        let vocab: VocabularyRes = serde_json::from_slice(&body).unwrap();
        assert!(vocab.symptoms.contains(&"Abdominal Pain".to_string()));
    }

    #[tokio::test]
    async fn test_assess_rejects_out_of_range_duration() {
        for days in [0, 15] {
            let (status, _) = send(
                app(),
                "POST",
                "/triage/assess",
                Some(json!({"symptoms": ["Fever"], "severity_level": "Mild", "duration_days": days})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_create_triage_record_rejects_out_of_range_duration() {
        let app = app();
        let (status, _) = send(
            app.clone(),
            "POST",
            "/api/triage/3",
            Some(json!({"symptoms": "Cough", "severity_level": "Severe", "duration_days": 15})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(app, "GET", "/api/triage/3", None).await;
        let list: ListTriageRecordsRes = serde_json::from_slice(&body).unwrap();
        assert!(list.records.is_empty());
    }

    #[test]
    fn test_error_response_maps_each_error_kind() {
        assert_eq!(
            error_response(TriageError::InvalidInput("bad".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(TriageError::RecordNotFound {
                user_id: 1,
                record_id: uuid::Uuid::nil(),
            })
            .0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(TriageError::StoreUnavailable),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        );
    }

    #[test]
    fn test_openapi_document_lists_triage_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/triage/assess"));
        assert!(doc.paths.paths.contains_key("/api/triage/vocabulary"));
        assert!(doc.paths.paths.contains_key("/api/triage/{user_id}"));
    }
}
