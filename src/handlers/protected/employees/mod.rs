pub mod find;
pub mod list;
pub mod record;

pub use find::find_post;
pub use list::employees_get;
pub use record::{employee_post, record_get, record_put};
