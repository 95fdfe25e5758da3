//! Georef API Service Library
//!
//! This crate provides the HTTP server implementation for the
//! place-name-only georeferencing API.

pub mod engine;
pub mod handlers;
pub mod state;
