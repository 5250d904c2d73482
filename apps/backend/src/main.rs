use actix_web::{web, App, HttpServer};
use ant_backend::config::db::DbProfile;
use ant_backend::config::media::MediaConfig;
use ant_backend::infra::state::build_state;
use ant_backend::middleware::cors::cors_middleware;
use ant_backend::middleware::request_trace::RequestTrace;
use ant_backend::middleware::structured_logger::StructuredLogger;
use ant_backend::middleware::trace_span::TraceSpan;
use ant_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let media = match MediaConfig::from_env() {
        Ok(media) => media,
        Err(e) => {
            eprintln!("❌ Invalid media configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_media(media)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%host, port, "starting ANT simulator backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
