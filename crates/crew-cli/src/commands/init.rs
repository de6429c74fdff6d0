//! Init command implementation

use std::path::Path;

use colored::Colorize;
use crew_core::Workspace;

use crate::error::Result;

/// Run the init command
pub fn run_init(root: &Path) -> Result<()> {
    let workspace = Workspace::init(root)?;

    println!(
        "{} Initialized crew workspace in {}",
        "OK".green().bold(),
        workspace.crew_dir().to_string().cyan()
    );
    println!(
        "   Next: {} to add a tool.",
        "crew add-tool <type>".cyan()
    );
    Ok(())
}
