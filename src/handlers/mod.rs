// handlers/mod.rs - handlers grouped by access tier
//
// Public: no caller context needed (/auth/*)
// Protected: behind the context-resolution layer (/api/*). Reads accept any
// caller; writes demand an ADMIN token inside the service.
pub mod public;
pub mod protected;
