// Rust guideline compliant 2026-10-19

//! Implementation of the `lostfound init` command.

use crate::terminal::print_success;
use anyhow::Result;
use lostfound_app::WorkspaceContext;
use std::path::Path;

/// Creates `.lostfound/` with a default config under `root`.
///
/// Re-running keeps an existing config.
///
/// # Errors
///
/// Returns an error if the directory or config file cannot be written.
pub fn execute(root: Option<&Path>, use_color: bool) -> Result<()> {
    let workspace = WorkspaceContext::init(root)?;
    print_success(
        &format!("Workspace initialized at {}", workspace.state_dir().display()),
        use_color,
    );
    println!("  - Config: {}", workspace.config_path().display());
    Ok(())
}
