use ant_backend::errors::ErrorCode;
use ant_backend::services::catalog::CatalogService;
use ant_backend::services::questions::QuestionService;

use crate::support::fixtures::{add_question, add_question_type, add_version, seed_catalog};
use crate::support::test_state::in_memory_db;

#[tokio::test]
async fn unknown_version_is_not_found() {
    let db = in_memory_db().await;
    seed_catalog(&db).await;

    let err = CatalogService::new()
        .list_licence_types(&db, Some(4242))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::VersionNotFound);
}

#[tokio::test]
async fn version_without_licences_lists_empty() {
    let db = in_memory_db().await;
    seed_catalog(&db).await;
    let empty = add_version(&db, 2019).await;

    let licences = CatalogService::new()
        .list_licence_types(&db, Some(empty))
        .await
        .unwrap();
    assert!(licences.is_empty());
}

#[tokio::test]
async fn unknown_licence_is_not_found() {
    let db = in_memory_db().await;

    let err = CatalogService::new()
        .get_licence_type(&db, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::LicenceNotFound);
}

#[tokio::test]
async fn question_types_are_listed_by_id() {
    let db = in_memory_db().await;
    add_question_type(&db, "Mechanics").await;
    add_question_type(&db, "First aid").await;

    let names: Vec<String> = CatalogService::new()
        .list_question_types(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Mechanics", "First aid"]);
}

#[tokio::test]
async fn reads_are_repeatable() {
    let db = in_memory_db().await;
    let catalog = seed_catalog(&db).await;
    add_question(&db, &catalog, 1, 3).await;
    add_question(&db, &catalog, 2, 4).await;

    let catalog_service = CatalogService::new();
    let question_service = QuestionService::new();

    let first_licences = catalog_service
        .list_licence_types(&db, Some(catalog.version_id))
        .await
        .unwrap();
    let first_questions = question_service
        .list_questions_by_licence(&db, catalog.licence_id)
        .await
        .unwrap();

    let second_licences = catalog_service
        .list_licence_types(&db, Some(catalog.version_id))
        .await
        .unwrap();
    let second_questions = question_service
        .list_questions_by_licence(&db, catalog.licence_id)
        .await
        .unwrap();

    assert_eq!(first_licences, second_licences);
    assert_eq!(first_questions, second_questions);
}

#[tokio::test]
async fn listing_questions_of_unknown_licence_is_not_found() {
    let db = in_memory_db().await;

    let err = QuestionService::new()
        .list_questions_by_licence(&db, 77)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::LicenceNotFound);
}
