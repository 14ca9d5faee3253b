//! Error types for queue scheduling runs.

use thiserror::Error;

/// Errors that abort a scheduling run.
///
/// A negative confirmation answer is not an error: the dispatch loops
/// treat it as "not complete yet".
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot dispatch from an empty queue")]
    EmptyQueue,

    #[error("Invalid quantum: burst time must be positive, got {0}")]
    InvalidQuantum(i64),

    #[error("Quantum limit exceeded (max: {limit})")]
    QuantumLimit { limit: u64 },

    #[error("Confirmation input closed")]
    OracleClosed,

    #[error("Unknown queueing mode: {0}")]
    UnknownMode(String),

    #[error("Unknown dispatch mode: {0}")]
    UnknownDispatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Error::EmptyQueue),
            "Cannot dispatch from an empty queue"
        );
        assert_eq!(
            format!("{}", Error::InvalidQuantum(0)),
            "Invalid quantum: burst time must be positive, got 0"
        );
        assert_eq!(
            format!("{}", Error::QuantumLimit { limit: 5 }),
            "Quantum limit exceeded (max: 5)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
