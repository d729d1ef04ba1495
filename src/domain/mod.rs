//! Domain entities exposed by the people service layer.

pub mod address;
pub mod person;
pub mod types;
