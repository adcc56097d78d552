//! Errors raised while loading or rendering an opcode table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid opcode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing \"{0}\" section in opcode JSON")]
    MissingSection(&'static str),
    #[error("opcode {key}: {source}")]
    InvalidRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
