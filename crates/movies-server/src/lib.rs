//! HTTP/JSON API server for the movie catalog.
//!
//! Exposes CRUD endpoints over an in-memory [`movies_storage::InMemoryStore`].
//! This crate contains the router, handlers, response schema, error mapping,
//! shared state and startup configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
