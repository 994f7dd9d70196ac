#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod session;
pub mod telemetry;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    BitString, Checksum, ChecksumTrace, Corruption, EdgeSpec, Encoded, Hop, ParityMode,
    RouteTable, Snapshot,
};
