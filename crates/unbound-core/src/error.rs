//! Error types for the prototype.

use thiserror::Error;

/// Engine-wide error type.
///
/// The movement core itself never fails; these cover the surfaces around it
/// (argument parsing, windowing, asset probing).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Malformed command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Platform error
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
