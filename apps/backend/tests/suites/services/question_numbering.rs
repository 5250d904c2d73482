use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use ant_backend::entities::questions;
use ant_backend::errors::ErrorCode;
use ant_backend::media::ImageUpload;
use ant_backend::repos::questions::last_number;
use ant_backend::services::questions::{
    QuestionDraft, QuestionNumbering, QuestionService, MAX_NUMBERING_ATTEMPTS,
};
use ant_backend::AppError;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::future::join_all;
use sea_orm::{DatabaseTransaction, EntityTrait, PaginatorTrait};

use crate::support::fixtures::{add_licence, add_question, seed_catalog, valid_choices_json};
use crate::support::test_state::build_test_state;

fn draft(licence_type_id: i32, question_type_id: i32) -> QuestionDraft {
    QuestionDraft {
        text: "Who has right of way at an unmarked junction?".into(),
        licence_type_id,
        question_type_id,
        choices_json: valid_choices_json(),
        image: None,
    }
}

#[tokio::test]
async fn empty_licence_reports_zero_then_one() {
    let (state, _) = build_test_state().await;
    let db = state.db().unwrap();
    let catalog = seed_catalog(db).await;

    let numbers = QuestionService::new()
        .get_last_question_number(db, catalog.licence_id)
        .await
        .unwrap();
    assert_eq!(numbers.last_num, 0);
    assert_eq!(numbers.next_num, 1);
}

#[tokio::test]
async fn unknown_licence_reports_zero() {
    let (state, _) = build_test_state().await;
    let db = state.db().unwrap();

    let numbers = QuestionService::new()
        .get_last_question_number(db, 9999)
        .await
        .unwrap();
    assert_eq!(numbers.last_num, 0);
}

#[tokio::test]
async fn sequential_creates_are_numbered_from_one() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let service = QuestionService::new();

    let mut nums = Vec::new();
    for _ in 0..3 {
        let created = service
            .create_question(&state, draft(catalog.licence_id, catalog.question_type_id))
            .await
            .unwrap();
        nums.push(created.num);
    }
    assert_eq!(nums, vec![1, 2, 3]);

    let numbers = service
        .get_last_question_number(state.db().unwrap(), catalog.licence_id)
        .await
        .unwrap();
    assert_eq!(numbers.last_num, 3);
    assert_eq!(numbers.next_num, 4);
}

#[tokio::test]
async fn numbering_is_per_licence() {
    let (state, _) = build_test_state().await;
    let db = state.db().unwrap();
    let catalog = seed_catalog(db).await;
    let other = add_licence(db, catalog.version_id, catalog.category_id, "A", Some(2)).await;
    let service = QuestionService::new();

    service
        .create_question(&state, draft(catalog.licence_id, catalog.question_type_id))
        .await
        .unwrap();
    service
        .create_question(&state, draft(catalog.licence_id, catalog.question_type_id))
        .await
        .unwrap();
    let first_of_other = service
        .create_question(&state, draft(other, catalog.question_type_id))
        .await
        .unwrap();

    assert_eq!(first_of_other.num, 1);
}

// The in-memory pool has a single connection, so these transactions run one
// after another; the retry path itself is covered by the stale numbering
// tests below.
#[tokio::test]
async fn overlapping_creates_get_distinct_numbers() {
    let (state, _) = build_test_state().await;
    let catalog = seed_catalog(state.db().unwrap()).await;
    let service = QuestionService::new();

    let results = join_all((0..4).map(|_| {
        service.create_question(&state, draft(catalog.licence_id, catalog.question_type_id))
    }))
    .await;

    let nums: BTreeSet<i32> = results
        .into_iter()
        .map(|r| r.expect("every create succeeds").num)
        .collect();
    assert_eq!(nums, BTreeSet::from([1, 2, 3, 4]));
}

/// Hands out an already used number for the first `stale_calls` calls, like a
/// writer that lost the race to a concurrent insert.
struct StaleNumbering {
    stale_calls: u32,
    calls: AtomicU32,
}

impl StaleNumbering {
    fn new(stale_calls: u32) -> Arc<Self> {
        Arc::new(Self {
            stale_calls,
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionNumbering for StaleNumbering {
    async fn next_number(
        &self,
        txn: &DatabaseTransaction,
        licence_type_id: i32,
    ) -> Result<i32, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.stale_calls {
            return Ok(1);
        }
        Ok(last_number(txn, licence_type_id).await? + 1)
    }
}

fn with_image(licence_type_id: i32, question_type_id: i32) -> QuestionDraft {
    QuestionDraft {
        image: Some(ImageUpload {
            bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\nfake"),
            filename: "junction.png".into(),
            content_type: Some("image/png".into()),
        }),
        ..draft(licence_type_id, question_type_id)
    }
}

#[tokio::test]
async fn taken_number_is_retried_with_the_same_image_url() {
    let (state, images) = build_test_state().await;
    let db = state.db().unwrap();
    let catalog = seed_catalog(db).await;
    add_question(db, &catalog, 1, 2).await;
    let numbering = StaleNumbering::new(2);
    let service = QuestionService::with_numbering(numbering.clone());

    let created = service
        .create_question(&state, with_image(catalog.licence_id, catalog.question_type_id))
        .await
        .unwrap();

    assert_eq!(created.num, 2);
    assert_eq!(numbering.calls(), 3);
    assert_eq!(images.uploaded(), vec!["junction.png".to_string()]);
    assert_eq!(
        created.image.as_deref(),
        Some("https://images.test/1/junction.png")
    );
}

#[tokio::test]
async fn numbering_gives_up_after_max_attempts() {
    let (state, images) = build_test_state().await;
    let db = state.db().unwrap();
    let catalog = seed_catalog(db).await;
    add_question(db, &catalog, 1, 2).await;
    let numbering = StaleNumbering::new(u32::MAX);
    let service = QuestionService::with_numbering(numbering.clone());

    let err = service
        .create_question(&state, with_image(catalog.licence_id, catalog.question_type_id))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::QuestionNumberTaken);
    assert_eq!(err.status(), actix_web::http::StatusCode::CONFLICT);
    assert_eq!(numbering.calls(), MAX_NUMBERING_ATTEMPTS);
    assert_eq!(images.uploaded().len(), 1);
    assert_eq!(questions::Entity::find().count(db).await.unwrap(), 1);
}
