use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{middleware as axum_middleware, routing::get, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

/// Shared application state: a database handle and the token-signing keys,
/// passed explicitly instead of living in globals.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<auth::AuthKeys>,
}

pub fn app(state: AppState) -> Router {
    let app_config = config::config();

    // Everything except /api/auth/* sits behind the bearer-token gate
    let protected = Router::new()
        .merge(author_routes())
        .merge(book_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::jwt_auth_middleware,
        ));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_routes())
        // Protected resources
        .merge(protected)
        // Global middleware
        .layer(cors_layer(&app_config.security))
        .layer(DefaultBodyLimit::max(app_config.api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer from security config: disabled entirely, wide open
/// for a `*` origin list, or restricted to the configured origins.
fn cors_layer(security: &config::SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::auth_register))
        .route("/api/auth/login", post(auth::auth_login))
}

fn author_routes() -> Router<AppState> {
    use handlers::authors;

    Router::new()
        // Author collection and records
        .route("/api/authors", get(authors::author_list).post(authors::author_create))
        .route(
            "/api/authors/:author_id",
            get(authors::author_get)
                .put(authors::author_update)
                .delete(authors::author_delete),
        )
        // Books nested under their owning author
        .route(
            "/api/authors/:author_id/books",
            get(authors::book_list).post(authors::book_create),
        )
        .route(
            "/api/authors/:author_id/books/:book_id",
            get(authors::book_get)
                .put(authors::book_update)
                .delete(authors::book_delete),
        )
}

fn book_routes() -> Router<AppState> {
    use handlers::books;

    Router::new()
        .route("/api/books", get(books::book_list).post(books::book_create))
        .route(
            "/api/books/:book_id",
            get(books::book_get).put(books::book_update).delete(books::book_delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Bookshelf API",
            "version": version,
            "description": "CRUD REST API for books and authors with JWT bearer authentication",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/api/auth/register, /api/auth/login (public - token acquisition)",
                "authors": "/api/authors[/:author_id] (protected)",
                "author_books": "/api/authors/:author_id/books[/:book_id] (protected)",
                "books": "/api/books[/:book_id] (protected)",
            }
        }
    }))
}

async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
