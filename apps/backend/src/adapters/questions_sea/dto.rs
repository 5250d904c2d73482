//! DTOs for the questions_sea adapter.

use crate::entities::{choices, question_categories, questions};

/// DTO for inserting a question row.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub text: String,
    pub image: Option<String>,
    pub num: i32,
    pub licence_type_id: i32,
    pub question_type_id: i32,
}

/// DTO for inserting one choice of a question.
#[derive(Debug, Clone)]
pub struct ChoiceCreate {
    pub text: String,
    pub image: Option<String>,
    pub is_correct: bool,
}

/// A question with its category and choices.
#[derive(Debug, Clone)]
pub struct QuestionRow {
    pub question: questions::Model,
    pub category: Option<question_categories::Model>,
    pub choices: Vec<choices::Model>,
}
