//! Id assignment for newly appended records.

use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// How the store picks the id of an appended record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `len + 1` at the time of the append.
    ///
    /// After a deletion this can hand out an id that a surviving record
    /// already holds. Kept as the default for compatibility with existing
    /// clients that predict ids from the list length.
    #[default]
    CountBased,
    /// A counter that starts past the highest numeric id in the store and
    /// never goes backwards, so ids are never reused.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "count-based" => Ok(IdStrategy::CountBased),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(StorageError::UnknownIdStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::CountBased => write!(f, "count"),
            IdStrategy::Monotonic => write!(f, "monotonic"),
        }
    }
}
