//! Errors surfaced at the runtime's boundaries.
//!
//! Only session persistence returns `Result`; the simulation path degrades
//! malformed data to logged no-ops instead of erroring.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session I/O at {path}: {source}")]
    SessionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session JSON: {0}")]
    SessionCodec(#[from] serde_json::Error),

    #[error("no session named {0:?}")]
    SessionMissing(String),

    #[error("invalid session name {0:?}: use letters, digits, '-' and '_'")]
    InvalidSessionName(String),
}
