//! HTTP handlers exposed by the people service.

pub mod people;
