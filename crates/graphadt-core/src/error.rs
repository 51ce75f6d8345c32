//! Error types for graphadt-core.

use thiserror::Error;

/// Graph ADT error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The referenced node does not currently exist.
    #[error("Node {0} not found")]
    NodeNotFound(u64),

    /// No edge connects `tail` to `head`.
    #[error("Edge {tail} -> {head} not found")]
    EdgeNotFound {
        /// Tail node ID.
        tail: u64,
        /// Head node ID.
        head: u64,
    },

    /// At least one endpoint of the requested edge does not exist.
    #[error("Invalid edge {tail} -> {head}: endpoint missing")]
    InvalidEdge {
        /// Tail node ID.
        tail: u64,
        /// Head node ID.
        head: u64,
    },

    /// An edge already connects `tail` to `head`.
    #[error("Edge {tail} -> {head} already exists")]
    DuplicateEdge {
        /// Tail node ID.
        tail: u64,
        /// Head node ID.
        head: u64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for errors caused by a missing node or edge.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NodeNotFound(_) | Error::EdgeNotFound { .. } | Error::InvalidEdge { .. }
        )
    }

    /// Returns true when the operation collided with existing state.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::DuplicateEdge { .. })
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
