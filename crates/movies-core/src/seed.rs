//! Fixed records loaded into the store at startup.

use crate::movie::{Director, Movie};

/// The three seed records, in order.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "123", "Movie One", Some(Director::new("John", "Doe"))),
        Movie::new("2", "456", "Movie Two", Some(Director::new("Steve", "Smith"))),
        Movie::new("3", "789", "Movie Three", Some(Director::new("Jane", "Doe"))),
    ]
}
