//! Factory error definitions.

use thiserror::Error;

use super::backend::BackendKind;

/// Errors that can occur while constructing a server request.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// No backend implementation is compiled into this build.
    #[error("no request factory backend available (tried: {tried}); enable one of the backend-* features")]
    NoBackend { tried: String },

    /// A specifically requested backend is not compiled in.
    #[error("backend '{kind}' is not compiled into this build")]
    BackendUnavailable { kind: BackendKind },

    /// The request target could not be parsed as a URI.
    #[error("invalid request URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },
}

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
