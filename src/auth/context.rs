use serde::Serialize;

use super::{AuthError, AuthUser, JwtKeys, Role};

/// Caller identity for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AuthContext {
    /// No credential supplied
    Anonymous,
    /// Token verified
    Authenticated { user: AuthUser },
    /// A credential was supplied but did not verify
    Invalid { reason: String },
}

impl AuthContext {
    /// Resolve from the raw `Authorization` header value, if any
    pub fn resolve(header: Option<&str>, keys: &JwtKeys) -> Self {
        let Some(raw) = header else {
            return AuthContext::Anonymous;
        };

        // Auth scheme names are case-insensitive
        let token = match raw.trim_start().split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
            _ => {
                return AuthContext::Invalid {
                    reason: "Authorization header must use Bearer token format".to_string(),
                }
            }
        };

        if token.is_empty() {
            return AuthContext::Invalid { reason: "Empty JWT token".to_string() };
        }

        match keys.validate_jwt(token) {
            Ok(claims) => AuthContext::Authenticated { user: AuthUser::from(claims) },
            Err(reason) => AuthContext::Invalid { reason },
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthContext::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    /// Why a supplied credential failed; `None` unless the context is `Invalid`
    pub fn invalid_reason(&self) -> Option<&str> {
        match self {
            AuthContext::Invalid { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Require a verified caller whose role is one of `required`.
///
/// An invalid token counts as no caller at all.
pub fn authorize<'a>(context: &'a AuthContext, required: &[Role]) -> Result<&'a AuthUser, AuthError> {
    let user = context.user().ok_or(AuthError::Unauthenticated)?;
    if !required.contains(&user.role) {
        return Err(AuthError::Forbidden { role: user.role });
    }
    Ok(user)
}
