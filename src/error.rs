// src/error.rs
use thiserror::Error;

/// Every way the probe can fail. All variants are reported the same way.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("{0}")]
    Write(#[source] mongodb::error::Error),

    #[error("failed to encode probe record: {0}")]
    Encode(#[from] bson::ser::Error),
}

