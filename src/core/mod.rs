//! Pure domain logic: no I/O, no prompting, no process-wide state except the
//! global random source consumed by `flip`.

mod bits;
mod checksum;
mod error;
mod flip;
mod parity;
mod route;

pub use bits::BitString;
pub use checksum::{Checksum, ChecksumTrace, VerifyReport};
pub use error::CoreError;
pub use flip::{Corruption, corrupt, corrupt_with};
pub use parity::{Encoded, ParityMode};
pub use route::{EdgeSpec, Hop, RouteTable, Snapshot, bellman_ford};
