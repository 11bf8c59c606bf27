use axum::Extension;

use crate::auth::AuthContext;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/auth/whoami - report how the bearer credential resolved
pub async fn whoami(Extension(context): Extension<AuthContext>) -> ApiResult<AuthContext> {
    Ok(ApiResponse::success(context))
}
