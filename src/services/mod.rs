mod common;
pub mod library;
pub mod school;

pub use library::LibraryService;
pub use school::SchoolService;
