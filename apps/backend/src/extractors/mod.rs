pub mod question_form;
pub mod validated_json;

pub use question_form::QuestionForm;
pub use validated_json::ValidatedJson;
