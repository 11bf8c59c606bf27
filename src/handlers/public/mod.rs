// handlers/public/mod.rs - token acquisition, no caller context consulted
pub mod auth;
