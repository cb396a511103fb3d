//! Movie CRUD handlers (list, get, create, update, delete).
//!
//! A missing record is answered with status 200 and the message
//! `"Movie not found"`. Request bodies are read as raw bytes and decoded
//! here, so a malformed body becomes a logged 400 regardless of the
//! request's content type.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use movies_core::{Movie, MovieId};
use movies_storage::MovieStore;

use crate::error::ApiError;
use crate::schema::movies::{self, GetMovieResponse};
use crate::state::AppState;

fn decode_movie(body: &[u8]) -> Result<Movie, ApiError> {
    movies_core::decode_movie(body).map_err(|err| {
        tracing::warn!(error = %err, "rejected movie body");
        ApiError::from(err)
    })
}

/// Lists all movies in store order.
///
/// `GET /movies`
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let store = state.store.lock().await;
    Json(store.list())
}

/// Returns one movie.
///
/// `GET /movies/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<GetMovieResponse> {
    let store = state.store.lock().await;
    match store.find_by_id(&MovieId(id)) {
        Ok(movie) => Json(GetMovieResponse::Found(movie)),
        Err(_) => Json(GetMovieResponse::not_found()),
    }
}

/// Appends a movie; the store assigns its id.
///
/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<&'static str>, ApiError> {
    let movie = decode_movie(&body)?;
    let mut store = state.store.lock().await;
    let id = store.append(movie);
    tracing::info!(%id, "movie created");
    Ok(Json(movies::CREATED))
}

/// Replaces a movie, keeping the id from the path.
///
/// `PUT /movies/{id}`
///
/// The body is only decoded once the record is known to exist, so an unknown
/// id answers "Movie not found" even when the body is malformed.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<&'static str>, ApiError> {
    let id = MovieId(id);
    let mut store = state.store.lock().await;
    let Ok(entry) = store.entry(&id) else {
        return Ok(Json(movies::NOT_FOUND));
    };

    entry.replace(decode_movie(&body)?);
    tracing::info!(%id, "movie updated");
    Ok(Json(movies::UPDATED))
}

/// Removes a movie. Deleting an absent id is not an error.
///
/// `DELETE /movies/{id}`
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<String> {
    let id = MovieId(id);
    let mut store = state.store.lock().await;
    match store.remove_by_id(&id) {
        Ok(_) => {
            tracing::info!(%id, "movie deleted");
            Json(movies::deleted(&id))
        }
        Err(_) => Json(movies::NOT_FOUND.to_string()),
    }
}
