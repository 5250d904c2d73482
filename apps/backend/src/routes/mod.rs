use actix_web::web;

pub mod health;
pub mod licences;
pub mod question_num;
pub mod questions;
pub mod versions;

/// Register every endpoint. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root and health: /, /health
    cfg.configure(health::configure_routes);

    // Exam versions: /versions/
    cfg.service(web::scope("/versions").configure(versions::configure_routes));

    // Licence types: /licences/**
    cfg.service(web::scope("/licences").configure(licences::configure_routes));

    // Questions: /questions/**
    cfg.service(web::scope("/questions").configure(questions::configure_routes));

    // Sequential numbering lookup: /fetchQuestionNum/
    cfg.service(web::scope("/fetchQuestionNum").configure(question_num::configure_routes));
}
