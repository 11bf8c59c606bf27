use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::AuthError;
use crate::config::{AppConfig, Environment};
use crate::handlers;
use crate::middleware::resolve_context_middleware;
use crate::services::DirectoryService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: DirectoryService,
}

impl AppState {
    /// Seeded directory plus demo accounts, configured from `config`
    pub fn demo(config: AppConfig) -> Result<Self, AuthError> {
        Ok(Self {
            service: DirectoryService::demo(Arc::new(config))?,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.service.config());

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes())
        // Context-resolved API
        .merge(api_routes(state.clone()))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router.with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new().route("/auth/login", post(auth::login_post))
}

fn api_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{auth, employees};

    Router::new()
        .route("/api/auth/whoami", get(auth::session_whoami))
        .route(
            "/api/employees",
            get(employees::employees_get).post(employees::employee_post),
        )
        .route(
            "/api/employees/:id",
            get(employees::record_get)
                .put(employees::record_put)
                .patch(employees::record_put),
        )
        .route("/api/find/employees", post(employees::find_post))
        .layer(from_fn_with_state(state, resolve_context_middleware))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }

    if matches!(config.environment, Environment::Development) {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Employee Directory API",
            "version": version,
            "endpoints": {
                "login": "POST /auth/login (public - token acquisition)",
                "whoami": "GET /api/auth/whoami",
                "list": "GET /api/employees?name=&className=&minAttendance=&sortField=&sortOrder=&page=&pageSize=",
                "find": "POST /api/find/employees",
                "show": "GET /api/employees/:id",
                "create": "POST /api/employees (ADMIN)",
                "update": "PUT|PATCH /api/employees/:id (ADMIN)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "employees": state.service.employee_count().await,
        }
    }))
}
