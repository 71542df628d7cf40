//! Error types for `jobtrack-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input validation failed; lists every field that was absent or blank.
  #[error("missing required fields: {}", .0.join(", "))]
  MissingFields(Vec<&'static str>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
