// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound upload` and `lostfound file`.

use crate::context::CommandContext;
use anyhow::{Context, Result};
use lostfound_app::AppError;
use lostfound_client::ImageVariant;
use serde_json::json;
use std::path::Path;

/// Uploads an image and prints its file id.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the upload fails.
pub async fn upload(ctx: &CommandContext, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let id = ctx
        .client()?
        .upload_file(&file_name, bytes)
        .await
        .map_err(AppError::from)?;
    ctx.emit(&ctx.formatter().format_message(&id, json!({ "id": id })));
    Ok(())
}

/// Downloads an image rendition to `output`.
///
/// # Errors
///
/// Returns an error if the download fails or the file cannot be written.
pub async fn download(ctx: &CommandContext, id: &str, original: bool, output: &Path) -> Result<()> {
    let variant = if original {
        ImageVariant::Original
    } else {
        ImageVariant::Thumbnail
    };
    let bytes = ctx
        .client()?
        .get_file(id, variant)
        .await
        .map_err(AppError::from)?;
    std::fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    ctx.emit(&ctx.formatter().format_message(
        &format!("Saved {} bytes to {}", bytes.len(), output.display()),
        json!({ "bytes": bytes.len(), "path": output }),
    ));
    Ok(())
}
