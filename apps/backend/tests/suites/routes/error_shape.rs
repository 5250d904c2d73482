use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use ant_backend::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use ant_backend::{AppError, AppState, ErrorCode};
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::support::app_builder::create_test_app;

async fn validation_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::InvalidChoicesJson,
        "choices_json is not valid JSON",
    ))
}

async fn number_taken() -> Result<HttpResponse, AppError> {
    Err(DomainError::conflict(
        ConflictKind::QuestionNumberTaken,
        "Question number already taken for this licence",
    )
    .into())
}

async fn upload_failed() -> Result<HttpResponse, AppError> {
    Err(DomainError::upload("image hosting returned 502 Bad Gateway").into())
}

async fn db_timeout() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::Timeout, "Database timeout").into())
}

async fn data_corruption() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(
        InfraErrorKind::DataCorruption,
        "Licence type 3 references a missing version",
    )
    .into())
}

fn error_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/validation", web::get().to(validation_error))
        .route("/conflict", web::get().to(number_taken))
        .route("/upload", web::get().to(upload_failed))
        .route("/timeout", web::get().to(db_timeout))
        .route("/corrupt", web::get().to(data_corruption));
}

// handler-only: validates error shape; no DB
#[actix_web::test]
async fn every_error_kind_renders_problem_details() {
    let app = create_test_app(AppState::new(None, None))
        .with_routes(error_routes)
        .build()
        .await;

    let cases = [
        ("/validation", "INVALID_CHOICES_JSON", StatusCode::BAD_REQUEST),
        ("/conflict", "QUESTION_NUMBER_TAKEN", StatusCode::CONFLICT),
        ("/upload", "UPLOAD_FAILED", StatusCode::INTERNAL_SERVER_ERROR),
        ("/timeout", "DB_TIMEOUT", StatusCode::GATEWAY_TIMEOUT),
        ("/corrupt", "DATA_CORRUPTION", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (uri, code, status) in cases {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let problem = assert_problem_details_from_service_response(resp, code, status).await;
        assert!(!problem.detail.is_empty(), "{uri} has an empty detail");
        assert!(!problem.title.is_empty(), "{uri} has an empty title");
    }
}

#[actix_web::test]
async fn missing_database_is_503_on_real_routes() {
    let app = create_test_app(AppState::new(None, None))
        .with_prod_routes()
        .build()
        .await;

    for uri in ["/versions/", "/questions/types/", "/licences/1"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_problem_details_from_service_response(
            resp,
            "DB_UNAVAILABLE",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .await;
    }
}

#[actix_web::test]
async fn trace_id_differs_between_requests() {
    let app = create_test_app(AppState::new(None, None))
        .with_routes(error_routes)
        .build()
        .await;

    let first = test::call_service(
        &app,
        test::TestRequest::get().uri("/validation").to_request(),
    )
    .await;
    let second = test::call_service(
        &app,
        test::TestRequest::get().uri("/validation").to_request(),
    )
    .await;

    let first = assert_problem_details_from_service_response(
        first,
        "INVALID_CHOICES_JSON",
        StatusCode::BAD_REQUEST,
    )
    .await;
    let second = assert_problem_details_from_service_response(
        second,
        "INVALID_CHOICES_JSON",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_ne!(first.trace_id, second.trace_id);
}
