//! List command implementation

use crate::catalog::KNOWN_SERVICES;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui;

/// Run the list command
pub fn run(args: ListArgs) -> Result<()> {
    ui::print_catalog(KNOWN_SERVICES, args.detailed);
    Ok(())
}
