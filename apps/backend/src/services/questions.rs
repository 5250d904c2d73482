//! Question queries and the question authoring workflow.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info, warn};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::choices::{parse_choices, ValidatedChoices};
use crate::domain::question_text::validate_question_text;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::media::{ImageUpload, MAX_IMAGE_BYTES};
use crate::repos::licences;
use crate::repos::questions::{self, NewQuestion, QuestionDetail};
use crate::state::app_state::AppState;

/// How many times numbering + insert is attempted when another request took
/// the same number first.
pub const MAX_NUMBERING_ATTEMPTS: u32 = 3;

/// Raw input of the authoring workflow, as received from the client.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub text: String,
    pub licence_type_id: i32,
    pub question_type_id: i32,
    pub choices_json: String,
    pub image: Option<ImageUpload>,
}

/// Last and next sequential number of a licence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionNumbers {
    pub last_num: i32,
    pub next_num: i32,
}

/// The number following `last_num`; a licence whose numbers reached
/// `i32::MAX` cannot take more questions.
pub fn next_after(last_num: i32) -> Result<i32, DomainError> {
    last_num.checked_add(1).ok_or_else(|| {
        DomainError::conflict(
            ConflictKind::Other("NumbersExhausted".into()),
            "No question numbers left for this licence",
        )
    })
}

/// Picks the number of a question about to be inserted. Runs inside the
/// insert transaction.
#[async_trait]
pub trait QuestionNumbering: Send + Sync {
    async fn next_number(
        &self,
        txn: &DatabaseTransaction,
        licence_type_id: i32,
    ) -> Result<i32, AppError>;
}

/// `max(num) + 1` over the licence's questions, 1 when it has none.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxPlusOne;

#[async_trait]
impl QuestionNumbering for MaxPlusOne {
    async fn next_number(
        &self,
        txn: &DatabaseTransaction,
        licence_type_id: i32,
    ) -> Result<i32, AppError> {
        let last = questions::last_number(txn, licence_type_id).await?;
        Ok(next_after(last)?)
    }
}

/// Question domain service.
#[derive(Clone)]
pub struct QuestionService {
    numbering: Arc<dyn QuestionNumbering>,
}

impl Default for QuestionService {
    fn default() -> Self {
        Self {
            numbering: Arc::new(MaxPlusOne),
        }
    }
}

impl fmt::Debug for QuestionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionService").finish_non_exhaustive()
    }
}

impl QuestionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the numbering step of `create_question`.
    pub fn with_numbering(numbering: Arc<dyn QuestionNumbering>) -> Self {
        Self { numbering }
    }

    /// Questions of a licence type ordered by number, with choices and
    /// question type embedded. `LICENCE_NOT_FOUND` when the licence is absent.
    pub async fn list_questions_by_licence<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        licence_id: i32,
    ) -> Result<Vec<QuestionDetail>, AppError> {
        ensure_licence(conn, licence_id).await?;
        Ok(questions::list_by_licence(conn, licence_id).await?)
    }

    /// Highest question number of the licence type; 0 when it has none,
    /// including when the licence does not exist.
    pub async fn get_last_question_number<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        licence_id: i32,
    ) -> Result<QuestionNumbers, AppError> {
        let last_num = questions::last_number(conn, licence_id).await?;
        Ok(QuestionNumbers {
            last_num,
            next_num: next_after(last_num)?,
        })
    }

    /// Validate the draft, upload its image, and insert the question with its
    /// choices in one transaction under the next sequential number.
    ///
    /// Nothing is persisted on any failure. The image is uploaded only after
    /// every input check has passed.
    pub async fn create_question(
        &self,
        state: &AppState,
        draft: QuestionDraft,
    ) -> Result<QuestionDetail, AppError> {
        let licence_id = draft.licence_type_id;
        match self.create_question_inner(state, draft).await {
            Ok(created) => {
                info!(
                    licence_id,
                    question_id = created.id,
                    num = created.num,
                    choices = created.choices.len(),
                    "question created"
                );
                Ok(created)
            }
            Err(err) => {
                warn!(licence_id, code = %err.code(), error = %err, "question creation failed");
                Err(err)
            }
        }
    }

    async fn create_question_inner(
        &self,
        state: &AppState,
        draft: QuestionDraft,
    ) -> Result<QuestionDetail, AppError> {
        let db = require_db(state)?;

        ensure_licence(db, draft.licence_type_id).await?;
        if questions::find_category(db, draft.question_type_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(
                NotFoundKind::QuestionType,
                format!("Question type {} not found", draft.question_type_id),
            )
            .into());
        }

        validate_question_text(&draft.text)?;
        let choices = parse_choices(&draft.choices_json)?;
        debug!(
            choices = choices.len(),
            correct = choices.correct_count(),
            "choices validated"
        );

        let image_url = match draft.image.filter(ImageUpload::is_present) {
            Some(upload) => Some(upload_image(state, upload).await?),
            None => None,
        };

        let question_id = insert_numbered(
            state,
            self.numbering.clone(),
            NewQuestion {
                text: draft.text,
                image: image_url,
                num: 0,
                licence_type_id: draft.licence_type_id,
                question_type_id: draft.question_type_id,
            },
            choices,
        )
        .await?;

        questions::find_question(db, question_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!("Question {question_id} vanished after insert"))
            })
    }
}

async fn ensure_licence<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_id: i32,
) -> Result<(), AppError> {
    if licences::licence_exists(conn, licence_id).await? {
        Ok(())
    } else {
        Err(DomainError::not_found(
            NotFoundKind::Licence,
            format!("Licence {licence_id} not found"),
        )
        .into())
    }
}

async fn upload_image(state: &AppState, upload: ImageUpload) -> Result<String, AppError> {
    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::validation(
            ValidationKind::ImageTooLarge,
            format!("Image exceeds the {MAX_IMAGE_BYTES} byte limit"),
        )
        .into());
    }
    let store = state
        .images()
        .ok_or_else(|| AppError::upload("Image storage is not configured"))?;
    Ok(store.store(upload).await?)
}

fn is_number_taken(err: &AppError) -> bool {
    err.code() == ErrorCode::QuestionNumberTaken
}

/// Number and insert inside one transaction, retrying when a concurrent
/// insert claimed the same number. `question.num` is ignored.
async fn insert_numbered(
    state: &AppState,
    numbering: Arc<dyn QuestionNumbering>,
    question: NewQuestion,
    choices: ValidatedChoices,
) -> Result<i32, AppError> {
    let mut attempt = 1;
    loop {
        let question = question.clone();
        let choices = choices.clone();
        let numbering = numbering.clone();
        let result = with_txn(state, move |txn| {
            Box::pin(async move {
                let num = numbering
                    .next_number(txn, question.licence_type_id)
                    .await?;
                let id = questions::insert_with_choices(
                    txn,
                    NewQuestion { num, ..question },
                    &choices,
                )
                .await?;
                Ok(id)
            })
        })
        .await;

        match result {
            Err(err) if is_number_taken(&err) && attempt < MAX_NUMBERING_ATTEMPTS => {
                warn!(attempt, "question number taken concurrently, retrying");
                attempt += 1;
            }
            other => return other,
        }
    }
}
