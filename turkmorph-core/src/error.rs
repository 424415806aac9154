//! Core error types
//!
//! Every variant here is a configuration error: it is raised while a graph,
//! root finder chain or predefined path table is being constructed and never
//! while a word is being parsed.

use thiserror::Error;

/// Construction-time errors of the analysis core
#[derive(Error, Debug)]
pub enum CoreError {
    /// A state name is registered twice across the module chain
    #[error("state '{name}' is already registered")]
    DuplicateState {
        /// The offending state name
        name: String,
    },

    /// A suffix name is registered twice across the module chain
    #[error("suffix '{name}' is already registered")]
    DuplicateSuffix {
        /// The offending suffix name
        name: String,
    },

    /// A suffix group name is registered twice across the module chain
    #[error("suffix group '{name}' is already registered")]
    DuplicateGroup {
        /// The offending group name
        name: String,
    },

    /// A state is referenced before any module registered it
    #[error("unknown state '{name}'")]
    UnknownState {
        /// The missing state name
        name: String,
    },

    /// A suffix is referenced before any module registered it
    #[error("unknown suffix '{name}'")]
    UnknownSuffix {
        /// The missing suffix name
        name: String,
    },

    /// A suffix group is referenced before any module registered it
    #[error("unknown suffix group '{name}'")]
    UnknownGroup {
        /// The missing group name
        name: String,
    },

    /// A stop-when-handled finder was added after a continue finder
    #[error("root finder '{finder}' with STOP_WHEN_HANDLED policy cannot follow a CONTINUE finder")]
    ChainOrdering {
        /// Name of the misplaced finder
        finder: String,
    },

    /// A finder pattern failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A digit string cannot be read as a number
    #[error("invalid numeral '{0}'")]
    InvalidNumeral(String),

    /// A predefined path could not be built
    #[error("predefined path for '{root}' failed: {reason}")]
    PredefinedPath {
        /// Root sequence of the path
        root: String,
        /// The reason the path could not be built
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
