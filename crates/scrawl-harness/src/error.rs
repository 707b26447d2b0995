//! Harness error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixture i/o on {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fixture json: {0}")]
    FixtureJson(#[from] serde_json::Error),
    #[error("log i/o: {0}")]
    LogIo(#[from] std::io::Error),
}
