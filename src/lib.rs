pub mod app;
pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod query;
pub mod services;

pub use app::{app, AppState};
