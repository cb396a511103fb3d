//! Movie endpoint response types and fixed reply messages.
//!
//! Successful replies are either a movie document or a bare JSON string.

use movies_core::{Movie, MovieId};
use serde::Serialize;

pub const PONG: &str = "Pong";
pub const NOT_FOUND: &str = "Movie not found";
pub const CREATED: &str = "Movie has been created";
pub const UPDATED: &str = "Movie has been updated";

/// Reply to `DELETE /movies/{id}` when the record existed.
pub fn deleted(id: &MovieId) -> String {
    format!("Movie with id {} has been deleted", id)
}

/// Response for `GET /movies/{id}`: the record, or a not-found message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GetMovieResponse {
    Found(Movie),
    Message(String),
}

impl GetMovieResponse {
    pub fn not_found() -> Self {
        GetMovieResponse::Message(NOT_FOUND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_response_serializes_untagged() {
        let found = GetMovieResponse::Found(Movie::new("4", "999", "New Movie", None));
        assert_eq!(
            serde_json::to_value(found).unwrap(),
            json!({ "id": "4", "isbn": "999", "title": "New Movie", "director": null })
        );
        assert_eq!(
            serde_json::to_value(GetMovieResponse::not_found()).unwrap(),
            json!("Movie not found")
        );
    }

    #[test]
    fn deleted_message_includes_id() {
        assert_eq!(
            deleted(&MovieId::from("1")),
            "Movie with id 1 has been deleted"
        );
    }
}
