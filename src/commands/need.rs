//! Need command implementation
//!
//! The end-to-end path: classify a natural-language request, then search,
//! install or create accordingly.

use crate::cli::NeedArgs;
use crate::commands::helpers;
use crate::config::Config;
use crate::error::Result;
use crate::ui;

/// Run the need command
pub fn run(config: &Config, args: NeedArgs) -> Result<()> {
    let text = args.text.trim();
    if text.is_empty() {
        ui::warn("nothing to do: the request is empty");
        return Ok(());
    }

    helpers::handle_request(
        config,
        text,
        helpers::choice_from_preference(args.prefer),
        args.offline,
    )
}
