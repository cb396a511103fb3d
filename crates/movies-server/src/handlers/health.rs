//! Liveness probe.

use axum::Json;

use crate::schema::movies::PONG;

/// `GET /ping`
pub async fn ping() -> Json<&'static str> {
    Json(PONG)
}
