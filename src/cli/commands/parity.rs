use crate::Result;
use crate::session::{self, StdioConsole};

/// Interactive only: the session owns stdout, `--json` does not apply.
pub(crate) fn handle() -> Result<()> {
    let mut console = StdioConsole;
    session::run(&mut console)
}
