// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound login` and `lostfound logout`.

use crate::context::CommandContext;
use anyhow::Result;
use lostfound_app::AppError;
use serde_json::json;
use std::io::BufRead;
use tracing::info;

/// Logs in and stores the session in the workspace.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `username` - Admin user name
/// * `password` - Password; read from the first stdin line when absent
///
/// # Errors
///
/// Returns an error if credentials are missing, the backend refuses them,
/// or the session cannot be written.
pub async fn login(ctx: &CommandContext, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password_line()?,
    };

    let session = ctx
        .client()?
        .login(username, &password)
        .await
        .map_err(AppError::from)?;
    ctx.workspace().session_store().save(&session)?;
    info!(username, expires_at = %session.expires_at, "admin session stored");

    ctx.emit(&ctx.formatter().format_message(
        &format!("Logged in as {} until {}", username, session.expires_at),
        json!({ "expires_at": session.expires_at }),
    ));
    Ok(())
}

/// Removes the stored session.
///
/// # Errors
///
/// Returns an error if the session file exists but cannot be removed.
pub fn logout(ctx: &CommandContext) -> Result<()> {
    let removed = ctx.workspace().session_store().clear()?;
    let message = if removed {
        "Logged out"
    } else {
        "No stored session"
    };
    ctx.emit(&ctx.formatter().format_message(message, json!({ "removed": removed })));
    Ok(())
}

fn read_password_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
