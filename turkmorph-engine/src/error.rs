//! Engine error types

use thiserror::Error;
use turkmorph_core::CoreError;

/// Errors raised while assembling or running the analyzer
#[derive(Error, Debug)]
pub enum EngineError {
    /// Graph, chain or predefined path construction failed
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::UnknownState {
            name: "NOWHERE".to_string(),
        }
        .into();
        assert!(matches!(err, EngineError::Core(_)));
        assert!(err.to_string().contains("NOWHERE"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err = EngineError::from(io);
        assert!(matches!(err, EngineError::IoError(ref msg) if msg.contains("missing.toml")));
    }
}
