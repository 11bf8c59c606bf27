// handlers/protected/mod.rs - /api/* routes
//
// Every request here carries an `AuthContext` extension inserted by
// `resolve_context_middleware`.
pub mod auth;
pub mod employees;
