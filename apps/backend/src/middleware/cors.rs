use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware from `CORS_ALLOWED_ORIGINS`:
/// - comma-separated `http(s)://` origins are allowed explicitly
/// - `*` allows any origin
/// - nothing configured falls back to the local front-end dev servers
pub fn cors_middleware() -> Cors {
    cors_from(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| *s == "*" || s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

fn cors_from(raw: &str) -> Cors {
    let origins = parse_origins(raw);

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    let effective = if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    };

    effective
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
