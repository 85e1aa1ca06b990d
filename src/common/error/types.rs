//! Crate-wide error type.
use thiserror::Error;

/// Main error type for wallcal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Presentation writing failed
    #[error("Presentation error: {0}")]
    Ooxml(#[from] crate::ooxml::OoxmlError),

    /// Year outside the supported calendar range
    #[error("Invalid year {0}: expected a value between 1 and 9999")]
    InvalidYear(i32),

    /// Month number outside 1..=12
    #[error("Invalid month {0}: expected a value between 1 and 12")]
    InvalidMonth(u32),

    /// Calendar grid that cannot hold every month on the slide
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Configuration file or command line problem
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for wallcal operations.
pub type Result<T> = std::result::Result<T, Error>;
