//! Database models shared across the people repository.

pub mod address;
pub mod config;
pub mod person;
