//! Error types for detection.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported package manager '{0}'")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
