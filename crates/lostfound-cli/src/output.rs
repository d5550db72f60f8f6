// Rust guideline compliant 2026-10-19

//! Output formatting module for the lostfound CLI.
//!
//! Dashboard views, review results, and public listings are rendered as JSON
//! envelopes, tables, or plain text depending on the selected format.

use chrono::{DateTime, Local, Utc};
use lostfound_app::{AppError, DashboardView, ErrorEnvelope, SuccessEnvelope, SyncOutcome};
use lostfound_client::PublicItem;
use lostfound_core::{ApprovedItem, Item, ItemStatus, OutputFormat, PendingItem, Stats, StatusTone};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::terminal::wrap_text;

/// Which partitions the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tab {
    /// Pending and approved.
    #[default]
    All,
    /// Review queue only.
    Pending,
    /// Reviewed items only.
    Approved,
}

impl Tab {
    fn shows_pending(self) -> bool {
        matches!(self, Tab::All | Tab::Pending)
    }

    fn shows_approved(self) -> bool {
        matches!(self, Tab::All | Tab::Approved)
    }
}

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats the dashboard for one tab.
    ///
    /// # Arguments
    /// * `view` - Filtered view and its stats
    /// * `tab` - Which partitions to include
    /// * `sync` - Outcome of the sync pass behind the view
    fn format_dashboard(&self, view: &DashboardView, tab: Tab, sync: &SyncOutcome) -> String;

    /// Formats the counters alone.
    fn format_stats(&self, stats: &Stats, sync: &SyncOutcome) -> String;

    /// Formats an item returned by a review or claim.
    fn format_item(&self, item: &ApprovedItem) -> String;

    /// Formats a public listing.
    fn format_public(&self, items: &[PublicItem]) -> String;

    /// Formats a short confirmation with an optional JSON payload.
    fn format_message(&self, message: &str, payload: serde_json::Value) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

fn local_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn optional_time(time: Option<DateTime<Utc>>) -> String {
    time.map(local_time).unwrap_or_else(|| "-".to_string())
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize output" }).to_string())
}

/// Color used for a status tone.
#[must_use]
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Neutral => Color::Cyan,
        StatusTone::Attention => Color::Yellow,
        StatusTone::Danger => Color::Red,
        StatusTone::Success => Color::Green,
    }
}

/// JSON output formatter.
///
/// Every result is wrapped in a success envelope; errors use the error
/// envelope with a stable code.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_dashboard(&self, view: &DashboardView, tab: Tab, sync: &SyncOutcome) -> String {
        let mut result = json!({
            "stats": view.stats,
            "filters_active": view.filters_active,
        });
        if tab.shows_pending() {
            result["pending"] = json!(view.pending);
        }
        if tab.shows_approved() {
            result["approved"] = json!(view.approved);
        }
        pretty(&SuccessEnvelope::new(result).with_sync(sync.clone()))
    }

    fn format_stats(&self, stats: &Stats, sync: &SyncOutcome) -> String {
        pretty(&SuccessEnvelope::new(stats).with_sync(sync.clone()))
    }

    fn format_item(&self, item: &ApprovedItem) -> String {
        pretty(&SuccessEnvelope::new(item))
    }

    fn format_public(&self, items: &[PublicItem]) -> String {
        pretty(&SuccessEnvelope::new(json!({
            "items": items,
            "total": items.len(),
        })))
    }

    fn format_message(&self, message: &str, payload: serde_json::Value) -> String {
        let mut result = json!({ "message": message });
        if !payload.is_null() {
            result["data"] = payload;
        }
        pretty(&SuccessEnvelope::new(result))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error.downcast_ref::<AppError>() {
            Some(app) => pretty(&ErrorEnvelope::from_error(app)),
            None => pretty(&json!({
                "status": "error",
                "code": "unknown",
                "message": error.to_string(),
            })),
        }
    }
}

/// Table output formatter.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to emit ANSI colors
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn status(&self, status: ItemStatus) -> String {
        self.paint(status.label(), tone_color(status.tone()), false)
    }

    fn stats_line(&self, stats: &Stats) -> String {
        format!(
            "{} pending  {} published  {} claimed  {} total",
            self.paint(&stats.pending.to_string(), tone_color(StatusTone::Neutral), true),
            self.paint(&stats.published.to_string(), tone_color(StatusTone::Attention), true),
            self.paint(&stats.claimed.to_string(), tone_color(StatusTone::Success), true),
            stats.total,
        )
    }

    fn pending_table(&self, items: &[PendingItem]) -> String {
        if items.is_empty() {
            return "No items awaiting review.".to_string();
        }
        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Type", "Item", "Location", "When", "Contact", "Submitted"]);
        for pending in items {
            let item = &pending.item;
            builder.push_record(vec![
                item.id.to_string(),
                item.kind.to_string(),
                item.item_name.clone(),
                item.location.clone(),
                local_time(item.lost_time),
                item.contact_info.clone(),
                local_time(item.created_at),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn approved_table(&self, items: &[ApprovedItem]) -> String {
        if items.is_empty() {
            return "No reviewed items.".to_string();
        }
        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Type", "Item", "Location", "Status", "Claimed by", "Claimed"]);
        for approved in items {
            let item = &approved.item;
            builder.push_record(vec![
                item.id.to_string(),
                item.kind.to_string(),
                item.item_name.clone(),
                item.location.clone(),
                approved.status().label().to_string(),
                approved.claimed_by().unwrap_or("-").to_string(),
                optional_time(approved.claim_time()),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn item_details(&self, item: &Item, status: ItemStatus) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:          {}\n", item.id));
        output.push_str(&format!("Item:        {}\n", item.item_name));
        output.push_str(&format!("Type:        {}\n", item.kind));
        output.push_str(&format!("Status:      {}\n", self.status(status)));
        output.push_str(&format!("Location:    {}\n", item.location));
        output.push_str(&format!("When:        {}\n", local_time(item.lost_time)));
        if !item.contact_info.is_empty() {
            output.push_str(&format!("Contact:     {}\n", item.contact_info));
        }
        if !item.description.is_empty() {
            output.push_str(&format!("Description: {}\n", wrap_text(&item.description, 13)));
        }
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_dashboard(&self, view: &DashboardView, tab: Tab, _sync: &SyncOutcome) -> String {
        let mut sections = vec![self.stats_line(&view.stats)];
        if tab.shows_pending() {
            sections.push(format!(
                "{}\n{}",
                self.paint("Pending review", Color::White, true),
                self.pending_table(&view.pending)
            ));
        }
        if tab.shows_approved() {
            sections.push(format!(
                "{}\n{}",
                self.paint("Reviewed", Color::White, true),
                self.approved_table(&view.approved)
            ));
        }
        sections.join("\n\n")
    }

    fn format_stats(&self, stats: &Stats, _sync: &SyncOutcome) -> String {
        self.stats_line(stats)
    }

    fn format_item(&self, item: &ApprovedItem) -> String {
        let mut output = self.item_details(&item.item, item.status());
        if item.status() == ItemStatus::Claimed {
            output.push_str(&format!("Claimed by:  {}\n", item.claimed_by().unwrap_or("-")));
            output.push_str(&format!("Claimed at:  {}\n", optional_time(item.claim_time())));
        }
        output
    }

    fn format_public(&self, items: &[PublicItem]) -> String {
        if items.is_empty() {
            return "No items found.".to_string();
        }
        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Item", "Location", "When", "Description"]);
        for item in items {
            builder.push_record(vec![
                item.id.to_string(),
                item.item_name.clone(),
                item.location.clone(),
                optional_time(item.lost_time),
                item.description.clone(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_message(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("{} {}", self.paint("Error:", Color::Red, true), error)
    }
}

/// Plain text output formatter, one record per line.
pub struct PlainFormatter;

impl PlainFormatter {
    fn stats_line(stats: &Stats) -> String {
        format!(
            "pending={} published={} claimed={} total={}",
            stats.pending, stats.published, stats.claimed, stats.total
        )
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_dashboard(&self, view: &DashboardView, tab: Tab, _sync: &SyncOutcome) -> String {
        let mut output = format!("{}\n", Self::stats_line(&view.stats));
        if tab.shows_pending() {
            for pending in &view.pending {
                let item = &pending.item;
                output.push_str(&format!(
                    "{} {} {} {}\n",
                    item.id,
                    ItemStatus::Pending,
                    item.kind,
                    item.item_name
                ));
            }
        }
        if tab.shows_approved() {
            for approved in &view.approved {
                let item = &approved.item;
                output.push_str(&format!(
                    "{} {} {} {}\n",
                    item.id,
                    approved.status(),
                    item.kind,
                    item.item_name
                ));
            }
        }
        output
    }

    fn format_stats(&self, stats: &Stats, _sync: &SyncOutcome) -> String {
        Self::stats_line(stats)
    }

    fn format_item(&self, item: &ApprovedItem) -> String {
        match item.claimed_by() {
            Some(claimed_by) => format!("{} {} {}", item.id(), item.status(), claimed_by),
            None => format!("{} {}", item.id(), item.status()),
        }
    }

    fn format_public(&self, items: &[PublicItem]) -> String {
        if items.is_empty() {
            return "No items found.".to_string();
        }
        let mut output = String::new();
        for item in items {
            output.push_str(&format!("{} {} @ {}\n", item.id, item.item_name, item.location));
        }
        output
    }

    fn format_message(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Creates the formatter for an output format.
///
/// # Arguments
/// * `format` - Selected output format
/// * `use_color` - Whether tables may use colors (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
