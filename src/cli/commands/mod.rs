use clap::Subcommand;

use crate::Result;

pub(super) mod checksum;
pub(super) mod parity;
pub(super) mod route;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive parity-bit session (encode, corrupt, check).
    #[command(alias = "lab")]
    Parity,

    /// One's-complement checksum operations.
    #[command(alias = "cs")]
    Checksum {
        #[command(subcommand)]
        cmd: checksum::ChecksumCmd,
    },

    /// Bellman-Ford distance-vector routing over an edge list.
    #[command(alias = "bf")]
    Route(route::RouteArgs),
}

pub(super) fn dispatch(command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Parity => parity::handle(),
        Commands::Checksum { cmd } => checksum::handle(json, cmd),
        Commands::Route(args) => route::handle(json, args),
    }
}
