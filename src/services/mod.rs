pub mod directory_service;

pub use directory_service::{DirectoryService, LoginResult, ServiceError};
