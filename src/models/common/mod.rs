pub mod lookup;
pub mod response;
