pub mod model;
pub mod store;

pub use model::{Employee, EmployeeInput};
pub use store::{DirectoryError, DirectoryStore, SharedDirectory};
