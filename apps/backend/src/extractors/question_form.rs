//! Multipart extractor for the question creation form.

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::future::LocalBoxFuture;
use futures_util::StreamExt;
use tracing::debug;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::media::{ImageUpload, MAX_IMAGE_BYTES};
use crate::services::questions::QuestionDraft;

/// Text fields above this size are rejected.
const MAX_TEXT_FIELD: usize = 256 * 1024;

/// The multipart form of `POST /questions/`: `text`, `licence_type_id`,
/// `question_type_id`, `choices_json` and an optional `image` file.
#[derive(Debug)]
pub struct QuestionForm(pub QuestionDraft);

impl QuestionForm {
    pub fn into_inner(self) -> QuestionDraft {
        self.0
    }
}

impl FromRequest for QuestionForm {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let multipart = Multipart::new(req.headers(), payload.take());
        Box::pin(async move { read_form(multipart).await.map(QuestionForm) })
    }
}

fn malformed(e: MultipartError) -> AppError {
    debug!(error = %e, "multipart parsing failed");
    AppError::bad_request(ErrorCode::BadRequest, format!("Malformed multipart body: {e}"))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<BytesMut, AppError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if buf.len() + chunk.len() > limit {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Form field exceeds {limit} bytes"),
            ));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn read_image(field: &mut Field) -> Result<BytesMut, AppError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if buf.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::validation(
                ValidationKind::ImageTooLarge,
                format!("Image exceeds the {MAX_IMAGE_BYTES} byte limit"),
            )
            .into());
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

fn utf8(name: &str, buf: BytesMut) -> Result<String, AppError> {
    String::from_utf8(buf.to_vec()).map_err(|_| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Form field '{name}' is not valid UTF-8"),
        )
    })
}

fn required<T>(name: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Missing form field '{name}'"),
        )
    })
}

fn parse_id(name: &str, raw: String) -> Result<i32, AppError> {
    raw.trim().parse::<i32>().map_err(|_| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Form field '{name}' must be an integer"),
        )
    })
}

async fn read_form(mut multipart: Multipart) -> Result<QuestionDraft, AppError> {
    let mut text = None;
    let mut licence_type_id = None;
    let mut question_type_id = None;
    let mut choices_json = None;
    let mut image = None;

    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(malformed)?;
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(str::to_string),
            ),
            None => (String::new(), None),
        };

        match name.as_str() {
            "text" => text = Some(utf8(&name, read_field(&mut field, MAX_TEXT_FIELD).await?)?),
            "licence_type_id" => {
                licence_type_id = Some(utf8(&name, read_field(&mut field, 32).await?)?)
            }
            "question_type_id" => {
                question_type_id = Some(utf8(&name, read_field(&mut field, 32).await?)?)
            }
            "choices_json" => {
                choices_json = Some(utf8(&name, read_field(&mut field, MAX_TEXT_FIELD).await?)?)
            }
            "image" => {
                let content_type = field.content_type().map(|m| m.to_string());
                let bytes = read_image(&mut field).await?;
                image = Some(ImageUpload {
                    bytes: bytes.freeze(),
                    filename: filename.unwrap_or_default(),
                    content_type,
                });
            }
            other => {
                debug!(field = %other, "ignoring unknown form field");
                // drain so the next field can be read
                read_field(&mut field, MAX_TEXT_FIELD).await?;
            }
        }
    }

    Ok(QuestionDraft {
        text: required("text", text)?,
        licence_type_id: parse_id(
            "licence_type_id",
            required("licence_type_id", licence_type_id)?,
        )?,
        question_type_id: parse_id(
            "question_type_id",
            required("question_type_id", question_type_id)?,
        )?,
        choices_json: required("choices_json", choices_json)?,
        image,
    })
}
