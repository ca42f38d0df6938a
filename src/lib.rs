use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// Origin allowed by the CORS layer when FRONTEND_ORIGIN is unset.
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Build the application router over a database pool.
///
/// The pool is the only shared state; it is injected here and reaches the
/// handlers through the `State` extractor. The CORS layer pins the frontend
/// origin and answers OPTIONS preflights itself, before routing.
pub fn app(pool: SqlitePool) -> Router {
    let origin = std::env::var("FRONTEND_ORIGIN")
        .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string());

    let cors = CorsLayer::new()
        .allow_origin(
            origin
                .parse::<HeaderValue>()
                .expect("FRONTEND_ORIGIN is not a valid header value"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Root and health
        .route("/", get(routes::index))
        .route("/api/health", get(routes::health::health_check))
        .route("/api/hello", get(routes::health::hello))

        // Athlete endpoints
        .route("/api/athletes", get(routes::athletes::get_athletes))
        .route("/api/athletes/fastest", get(routes::athletes::get_fastest_athletes))
        .route("/api/athletes/history", get(routes::athletes::get_athlete_history))
        .route("/api/athletes/{id}", get(routes::athletes::get_athlete_by_id))

        // Meet endpoints
        .route("/api/meets", get(routes::meets::get_meets))

        // Result endpoints
        .route("/api/results", get(routes::results::get_results))
        .route("/api/results/fastest", get(routes::results::get_fastest_times))
        .route("/api/results/latest", get(routes::results::get_latest_meet_results))
        .route("/api/results/meet/{id}", get(routes::results::get_results_by_meet))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
