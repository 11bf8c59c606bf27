use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::AuthContext;
use crate::error::ApiError;

/// Resolves the caller for every request and stores the `AuthContext` in
/// request extensions. Never fails for a missing credential; fails for a bad
/// one only when `security.reject_invalid_tokens` is set.
pub async fn resolve_context_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = match headers.get(AUTHORIZATION) {
        None => AuthContext::Anonymous,
        Some(value) => match value.to_str() {
            Ok(raw) => state.service.resolve_context(Some(raw)),
            Err(_) => AuthContext::Invalid {
                reason: "Invalid Authorization header format".to_string(),
            },
        },
    };

    if state.service.config().security.reject_invalid_tokens {
        if let Some(reason) = context.invalid_reason() {
            return Err(ApiError::unauthorized(reason));
        }
    }

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}
