pub mod errors;
pub mod people;
pub mod seed;

pub use errors::{ServiceError, ServiceResult};
