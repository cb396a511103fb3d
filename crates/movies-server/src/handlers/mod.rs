//! HTTP handler modules for the movie catalog API.
//!
//! Handlers are thin: they extract the request, lock the store, call one
//! [`movies_storage::MovieStore`] operation and return JSON.

pub mod health;
pub mod movies;
