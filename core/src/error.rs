use std::path::PathBuf;
use std::time::Duration;

use macfind_common::network::mac::InvalidMac;
use thiserror::Error;

/// Every way a lookup can fail.
///
/// Only [`LookupError::LocalDb`] is recovered from inside the pipeline; all
/// other kinds are returned to the caller.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] InvalidMac),

    #[error("failed to read local database {path}: {source}")]
    LocalDb {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("remote lookup timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("remote request failed: {0}")]
    RemoteRequest(#[source] reqwest::Error),

    #[error("status code error: {code} {reason}")]
    RemoteStatus { code: u16, reason: String },

    #[error("failed to read remote response body: {0}")]
    RemoteRead(#[source] reqwest::Error),

    #[error("remote lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl LookupError {
    pub fn local_db(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LocalDb {
            path: path.into(),
            source,
        }
    }
}
