//! Decoding movie documents from request bodies.
//!
//! Clients written against the original service rely on its lenient JSON
//! handling, so decoding follows the same rules:
//!
//! - object keys match field names case-insensitively (`"Title"`, `"ISBN"`);
//!   when a field appears twice the last value wins
//! - `null` for a string field leaves it empty, `null` for `director` clears it
//! - missing fields stay empty and unknown keys are ignored
//! - a body of `null` decodes to an empty movie
//! - anything after the first JSON value in the body is ignored
//!
//! A value of the wrong type (a number for `title`, an array for the body)
//! is still an error.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::CoreError;
use crate::movie::{Director, Movie};

/// Decodes the first JSON value in `body` as a movie.
pub fn decode_movie(body: &[u8]) -> Result<Movie, CoreError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Movie>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(CoreError::EmptyBody),
    }
}

/// Writes `value` into `slot` unless it was `null`.
fn assign(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl<'de> Deserialize<'de> for Movie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MovieVisitor)
    }
}

struct MovieVisitor;

impl<'de> Visitor<'de> for MovieVisitor {
    type Value = Movie;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a movie object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Movie, A::Error> {
        let mut movie = Movie::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => assign(&mut movie.id.0, map.next_value()?),
                "isbn" => assign(&mut movie.isbn, map.next_value()?),
                "title" => assign(&mut movie.title, map.next_value()?),
                "director" => movie.director = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(movie)
    }
}

impl<'de> Deserialize<'de> for Director {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DirectorVisitor)
    }
}

struct DirectorVisitor;

impl<'de> Visitor<'de> for DirectorVisitor {
    type Value = Director;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a director object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Director, A::Error> {
        let mut director = Director::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "firstname" => assign(&mut director.firstname, map.next_value()?),
                "lastname" => assign(&mut director.lastname, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(director)
    }
}
