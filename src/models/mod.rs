pub mod authors;
pub mod books;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod students;

pub use common::lookup::{Lookup, NotFound};
pub use common::response::ErrorDetail;
