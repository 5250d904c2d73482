use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use ant_backend::entities::questions;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::common::read_json;
use crate::support::app_builder::create_test_app;
use crate::support::fake_images::FailingImageStore;
use crate::support::fixtures::{seed_catalog, valid_choices_json};
use crate::support::multipart::{question_form, FormBuilder};
use crate::support::test_state::{build_test_state, in_memory_db, state_with};

#[actix_web::test]
async fn create_returns_201_with_embedded_relations() {
    let (state, images) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(catalog.licence_id, catalog.question_type_id, &valid_choices_json())
        .file("image", "stop.png", b"\x89PNG\r\n\x1a\nbytes")
        .into_request()
        .to_request();
    let body = read_json(test::call_service(&app, req).await, 201).await;

    assert_eq!(body["num"], 1);
    assert_eq!(body["licence_type_id"], catalog.licence_id);
    assert_eq!(body["question_type_id"], catalog.question_type_id);
    assert_eq!(body["question_type"]["id"], catalog.question_type_id);
    assert_eq!(body["image"], "https://images.test/1/stop.png");
    assert_eq!(body["choices"].as_array().unwrap().len(), 3);
    assert_eq!(images.uploaded(), vec!["stop.png".to_string()]);
}

#[actix_web::test]
async fn second_create_gets_next_number() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for expected in 1..=2 {
        let req =
            question_form(catalog.licence_id, catalog.question_type_id, &valid_choices_json())
                .into_request()
                .to_request();
        let body = read_json(test::call_service(&app, req).await, 201).await;
        assert_eq!(body["num"], expected);
        assert!(body["image"].is_null());
    }
}

#[actix_web::test]
async fn empty_image_part_means_no_image() {
    let (state, images) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(catalog.licence_id, catalog.question_type_id, &valid_choices_json())
        .file("image", "", b"")
        .into_request()
        .to_request();
    let body = read_json(test::call_service(&app, req).await, 201).await;

    assert!(body["image"].is_null());
    assert!(images.uploaded().is_empty());
}

#[actix_web::test]
async fn no_correct_choice_is_400() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(
        catalog.licence_id,
        catalog.question_type_id,
        r#"[{"text":"A"},{"text":"B"}]"#,
    )
    .into_request()
    .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "NO_CORRECT_CHOICE",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[actix_web::test]
async fn unknown_licence_is_404() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(9999, catalog.question_type_id, &valid_choices_json())
        .into_request()
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "LICENCE_NOT_FOUND",
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[actix_web::test]
async fn missing_field_is_validation_error() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = FormBuilder::new()
        .text("text", "Incomplete")
        .text("licence_type_id", &catalog.licence_id.to_string())
        .text("question_type_id", &catalog.question_type_id.to_string())
        .into_request()
        .to_request();
    let problem = assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(problem.detail.contains("choices_json"));
}

#[actix_web::test]
async fn non_integer_id_is_validation_error() {
    let (state, _) = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(1, 1, &valid_choices_json())
        .text("licence_type_id", "one")
        .into_request()
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[actix_web::test]
async fn upload_failure_is_500_and_persists_nothing() {
    let db = in_memory_db().await;
    let catalog = seed_catalog(&db).await;
    let state = state_with(db.clone(), Some(Arc::new(FailingImageStore)));
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = question_form(catalog.licence_id, catalog.question_type_id, &valid_choices_json())
        .file("image", "stop.png", b"\x89PNG")
        .into_request()
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "UPLOAD_FAILED",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;

    assert_eq!(questions::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn json_body_is_rejected() {
    let (state, _) = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/questions/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{}")
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
    )
    .await;
}
