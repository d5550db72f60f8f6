// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound report`.

use crate::context::CommandContext;
use anyhow::Result;
use chrono::Utc;
use lostfound_app::{local_now, parse_range_bound, AppError, RangeBound};
use lostfound_client::ItemReport;
use lostfound_core::ItemKind;

/// Fields of a visitor report.
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long)]
    pub description: String,

    /// Where it was lost or found
    #[arg(long)]
    pub location: String,

    /// Contact information (required for lost reports)
    #[arg(long)]
    pub contact: Option<String>,

    /// When it was lost or found; defaults to now
    #[arg(long)]
    pub time: Option<String>,

    /// Id of a previously uploaded image
    #[arg(long)]
    pub image_id: Option<String>,
}

impl ReportArgs {
    fn into_report(self) -> lostfound_app::Result<ItemReport> {
        let lost_time = match &self.time {
            Some(value) => parse_range_bound(value, RangeBound::Start, *local_now().offset())?,
            None => Utc::now(),
        };
        Ok(ItemReport {
            item_name: self.name,
            description: self.description,
            location: self.location,
            contact_info: self.contact,
            lost_time,
            image_id: self.image_id,
        })
    }
}

/// Submits a lost or found report.
///
/// # Errors
///
/// Returns an error if a required field is blank (nothing is sent) or the
/// backend rejects the report.
pub async fn execute(ctx: &CommandContext, kind: ItemKind, args: ReportArgs) -> Result<()> {
    let report = args.into_report()?;
    let response = ctx
        .client()?
        .report(kind, &report)
        .await
        .map_err(AppError::from)?;
    ctx.emit(&ctx.formatter().format_message(
        &format!("{} report submitted for review", kind),
        response,
    ));
    Ok(())
}
