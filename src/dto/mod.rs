//! DTO modules that bridge services with the JSON API.

pub mod people;
