//! Hand-built `multipart/form-data` bodies for the question form.

use actix_web::test::TestRequest;

const BOUNDARY: &str = "----ant-test-boundary";

#[derive(Debug, Default)]
pub struct FormBuilder {
    body: Vec<u8>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// `POST /questions/` carrying the form.
    pub fn into_request(mut self) -> TestRequest {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        TestRequest::post()
            .uri("/questions/")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(self.body)
    }
}

/// The four required fields of a valid question.
pub fn question_form(licence_id: i32, question_type_id: i32, choices_json: &str) -> FormBuilder {
    FormBuilder::new()
        .text("text", "What does a red octagon mean?")
        .text("licence_type_id", &licence_id.to_string())
        .text("question_type_id", &question_type_id.to_string())
        .text("choices_json", choices_json)
}
