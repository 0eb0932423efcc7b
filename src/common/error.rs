//! Error types for recordindex.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in recordindex.
///
/// Only construction can fail. Once an index exists, `insert` and `search`
/// are total: a missing key is a `found == false` result, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested minimum degree is outside `floor..=ceiling`.
    ///
    /// No index is returned when this happens.
    #[error("Invalid config: minimum degree must be in {floor}..={ceiling}, got {min_degree}")]
    InvalidConfig {
        min_degree: usize,
        floor: usize,
        ceiling: usize,
    },
}
