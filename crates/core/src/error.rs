//! Error types for engine construction and stage execution

use thiserror::Error;

/// Errors that can occur while constructing an engine or running the
/// pipeline outside of stage boundaries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required lexical resource table could not be found.
    ///
    /// This is the only fatal construction error: callers that load an
    /// external resource directory must not proceed without it.
    #[error("required lexical resource missing: {0}")]
    MissingResource(String),

    /// A resource file exists but could not be parsed.
    #[error("failed to parse lexical resource {path}")]
    InvalidResource {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A resource file could not be read.
    #[error("failed to read lexical resource {path}")]
    ResourceIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised inside a single transformation stage.
///
/// These never cross the pipeline boundary: the pipeline logs the error and
/// passes the sentence through unchanged. Stages return `Err` instead of
/// panicking on malformed input.
#[derive(Debug, Error)]
pub enum StageError {
    /// The stage would have produced an empty sentence.
    #[error("stage produced empty output")]
    EmptyOutput,

    /// The stage could not make sense of its input.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
