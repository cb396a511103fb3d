pub mod decode;
pub mod error;
pub mod id;
pub mod movie;
pub mod seed;

// Re-export commonly used types
pub use decode::decode_movie;
pub use error::CoreError;
pub use id::MovieId;
pub use movie::{Director, Movie};
pub use seed::seed_movies;
