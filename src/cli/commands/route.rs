use clap::Args;

use super::super::{print_ok, render};
use crate::Result;
use crate::core::{EdgeSpec, bellman_ford};

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Undirected edge, repeatable (e.g. `--edge A:B:3`).
    #[arg(long = "edge", value_name = "FROM:TO:WEIGHT", required = true)]
    pub edges: Vec<EdgeSpec>,

    /// Node to route from.
    #[arg(long, value_name = "NODE")]
    pub source: String,

    /// Show the distance table after every relaxation pass.
    #[arg(long)]
    pub trace: bool,
}

pub(crate) fn handle(json: bool, args: RouteArgs) -> Result<()> {
    let table = bellman_ford(&args.edges, &args.source);
    tracing::debug!(
        nodes = table.nodes.len(),
        passes = table.snapshots.len() - 1,
        negative_cycle = table.has_negative_cycle,
        "bellman-ford converged"
    );
    let human = render::render_route(&table, args.trace);
    print_ok(&table, &human, json)
}
