use clap::{Args, Subcommand};

use super::super::{print_ok, render};
use crate::Result;
use crate::core::{Checksum, ChecksumTrace, VerifyReport};

#[derive(Subcommand, Debug)]
pub enum ChecksumCmd {
    /// Compute the 8-bit one's-complement checksum of TEXT.
    Sum(SumArgs),

    /// Receiver-side verification of TEXT against a hex checksum.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct SumArgs {
    /// Data to checksum (ASCII text).
    pub text: String,

    /// Show the step-by-step computation.
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Data as received.
    pub text: String,

    /// Checksum as received (hex byte, e.g. `BE`).
    pub checksum: String,
}

pub(crate) fn handle(json: bool, cmd: ChecksumCmd) -> Result<()> {
    match cmd {
        ChecksumCmd::Sum(args) => {
            let trace = ChecksumTrace::of(&args.text);
            tracing::debug!(checksum = %trace.checksum, "computed checksum");
            let human = render::render_checksum(&args.text, &trace, args.trace);
            print_ok(&trace, &human, json)
        }
        ChecksumCmd::Verify(args) => {
            let received = Checksum::parse_hex(&args.checksum)?;
            let report = VerifyReport::check(&args.text, received);
            let human = render::render_verify(received, &report);
            print_ok(&report, &human, json)
        }
    }
}
