//! Core capability errors (parsing and validation).
//!
//! These are bounded and stable: core errors represent domain/refusal
//! states, not library implementation details.

use thiserror::Error;

/// Canonical error enum for the core capability.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CoreError {
    #[error("binary string `{raw}` is invalid: {reason}")]
    InvalidBits { raw: String, reason: String },

    #[error("parity mode `{raw}` is invalid: expected `even` or `odd`")]
    InvalidMode { raw: String },

    #[error("checksum `{raw}` is invalid: {reason}")]
    InvalidChecksum { raw: String, reason: String },

    #[error("edge `{raw}` is invalid: {reason}")]
    InvalidEdge { raw: String, reason: String },
}
