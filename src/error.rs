use thiserror::Error;

use crate::core::CoreError;

/// Crate-level convenience error.
///
/// Not a "god error": it is a thin wrapper over the canonical domain errors
/// plus the I/O failures the interactive console can hit.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
