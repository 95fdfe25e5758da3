//! HTTP request handlers.

pub mod constants;
pub mod health;
pub mod place;
