// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound dashboard` and `lostfound stats`.
//!
//! Both run a full sync pass and then derive the filtered view locally.

use crate::context::CommandContext;
use crate::output::Tab;
use crate::progress::ProgressReporter;
use crate::terminal::print_warning;
use anyhow::Result;
use chrono::FixedOffset;
use lostfound_app::{local_now, parse_range_bound, AdminConsole, RangeBound, SyncOutcome};
use lostfound_client::ApiClient;
use lostfound_core::{DateRange, FilterConfig, StatusFilter, TimeFilter, TypeFilter};
use std::sync::Arc;

/// Filter flags shared by the dashboard commands.
#[derive(Debug, Clone, clap::Args)]
pub struct FilterArgs {
    /// Case-insensitive match on name, description, location, or contact
    #[arg(long)]
    pub search: Option<String>,

    /// Report type: all, lost, found
    #[arg(long = "type", value_name = "TYPE", default_value = "all")]
    pub kind: TypeFilter,

    /// Status: all, pending, published, claimed, rejected
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Creation time: all, today, week, month, custom
    #[arg(long, default_value = "all")]
    pub time: TimeFilter,

    /// Start of the custom range (date or date-time)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the custom range (date or date-time)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Builds the filter configuration.
    ///
    /// Giving `--from` or `--to` without `--time` selects the custom range.
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset for date arguments without one
    ///
    /// # Errors
    ///
    /// Returns an error if a range bound cannot be parsed.
    pub fn to_config(&self, offset: FixedOffset) -> lostfound_app::Result<FilterConfig> {
        let parse = |value: &Option<String>, bound| {
            value
                .as_deref()
                .map(|value| parse_range_bound(value, bound, offset))
                .transpose()
        };
        let custom_range = DateRange {
            start: parse(&self.from, RangeBound::Start)?,
            end: parse(&self.to, RangeBound::End)?,
        };

        let has_range = custom_range.start.is_some() || custom_range.end.is_some();
        let time_filter = match self.time {
            TimeFilter::All if has_range => TimeFilter::Custom,
            other => other,
        };

        Ok(FilterConfig {
            search_term: self.search.clone().unwrap_or_default(),
            type_filter: self.kind,
            status_filter: self.status,
            time_filter,
            custom_range,
        })
    }
}

/// Syncs all admin items through a fresh console.
///
/// # Errors
///
/// Returns an error if no session is stored or the page size is invalid.
/// Sync failures are reported in the outcome instead.
pub async fn synced_console(ctx: &CommandContext) -> Result<(AdminConsole<ApiClient>, SyncOutcome)> {
    let client = Arc::new(ctx.admin_client()?);
    let page_size = ctx.page_size()?;
    let console = AdminConsole::new(client);

    let reporter = ProgressReporter::new("Syncing", ctx.show_progress());
    let outcome = reporter
        .track(console.refresh(page_size), console.store().subscribe())
        .await;

    if let SyncOutcome::Aborted { error, .. } = &outcome {
        if !ctx.is_json() {
            print_warning(&format!("Sync incomplete, showing partial data: {}", error), ctx.use_color());
        }
    }
    Ok((console, outcome))
}

/// Shows the filtered dashboard.
///
/// # Errors
///
/// Returns an error if the filters are invalid or no session is stored.
pub async fn execute(ctx: &CommandContext, filters: &FilterArgs, tab: Tab) -> Result<()> {
    let now = local_now();
    let config = filters.to_config(*now.offset())?;
    let (console, outcome) = synced_console(ctx).await?;

    let view = console.view(&config, now);
    ctx.emit(&ctx.formatter().format_dashboard(&view, tab, &outcome));
    Ok(())
}

/// Shows the counters for the filtered dashboard.
///
/// # Errors
///
/// Returns an error if the filters are invalid or no session is stored.
pub async fn stats(ctx: &CommandContext, filters: &FilterArgs) -> Result<()> {
    let now = local_now();
    let config = filters.to_config(*now.offset())?;
    let (console, outcome) = synced_console(ctx).await?;

    let view = console.view(&config, now);
    ctx.emit(&ctx.formatter().format_stats(&view.stats, &outcome));
    Ok(())
}
