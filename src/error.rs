use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("no candidates to balance across")]
    NoCandidates,

    #[error("unknown service: {0}")]
    UnknownService(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario has no endpoints")]
    Empty,
}
