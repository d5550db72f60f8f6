// Rust guideline compliant 2026-10-19

//! Filter engine for the admin item view.
//!
//! Filtering is a pure function of the items, a [`FilterConfig`] and the
//! current time, so it can be re-evaluated on every state change. The
//! predicates are combined with logical AND.

use crate::error::{Error, Result};
use crate::models::{ApprovedItem, Item, ItemKind, ItemStatus, PendingItem};
use chrono::{DateTime, Duration, FixedOffset, Months, NaiveDate, TimeZone, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Anything the filter engine can evaluate.
pub trait Filterable {
    /// Common item fields.
    fn item(&self) -> &Item;
    /// Current review status.
    fn status(&self) -> ItemStatus;
}

impl Filterable for PendingItem {
    fn item(&self) -> &Item {
        &self.item
    }

    fn status(&self) -> ItemStatus {
        ItemStatus::Pending
    }
}

impl Filterable for ApprovedItem {
    fn item(&self) -> &Item {
        &self.item
    }

    fn status(&self) -> ItemStatus {
        ApprovedItem::status(self)
    }
}

/// Lost/found selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    /// Any kind.
    #[default]
    All,
    /// Lost reports only.
    Lost,
    /// Found reports only.
    Found,
}

impl TypeFilter {
    fn matches(self, kind: ItemKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Lost => kind == ItemKind::Lost,
            TypeFilter::Found => kind == ItemKind::Found,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "lost" => Ok(TypeFilter::Lost),
            "found" => Ok(TypeFilter::Found),
            _ => Err(Error::Validation(format!("Invalid type filter: {}", value))),
        }
    }
}

/// Review status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Any status.
    #[default]
    All,
    /// Pending items. Never matches the approved partition.
    Pending,
    /// Published items.
    Published,
    /// Claimed items.
    Claimed,
    /// Rejected items.
    Rejected,
}

impl StatusFilter {
    fn matches(self, status: ItemStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ItemStatus::Pending,
            StatusFilter::Published => status == ItemStatus::Published,
            StatusFilter::Claimed => status == ItemStatus::Claimed,
            StatusFilter::Rejected => status == ItemStatus::Rejected,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "published" => Ok(StatusFilter::Published),
            "claimed" => Ok(StatusFilter::Claimed),
            "rejected" => Ok(StatusFilter::Rejected),
            _ => Err(Error::Validation(format!(
                "Invalid status filter: {}",
                value
            ))),
        }
    }
}

/// Creation-time selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    /// No time restriction.
    #[default]
    All,
    /// Same calendar date as now.
    Today,
    /// Trailing seven days.
    Week,
    /// On or after the same date one calendar month ago.
    Month,
    /// Inside [`FilterConfig::custom_range`].
    Custom,
}

impl FromStr for TimeFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "all" => Ok(TimeFilter::All),
            "today" => Ok(TimeFilter::Today),
            "week" => Ok(TimeFilter::Week),
            "month" => Ok(TimeFilter::Month),
            "custom" => Ok(TimeFilter::Custom),
            _ => Err(Error::Validation(format!("Invalid time filter: {}", value))),
        }
    }
}

/// Inclusive creation-time range used by [`TimeFilter::Custom`].
///
/// When either bound is missing the range matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound, inclusive.
    pub start: Option<DateTime<Utc>>,
    /// Upper bound, inclusive.
    pub end: Option<DateTime<Utc>>,
}

/// Filter configuration for the admin view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case-insensitive text searched in name, description, location and contact.
    pub search_term: String,
    /// Lost/found selector.
    pub type_filter: TypeFilter,
    /// Status selector.
    pub status_filter: StatusFilter,
    /// Creation-time selector.
    pub time_filter: TimeFilter,
    /// Range for the custom time filter.
    pub custom_range: DateRange,
}

impl FilterConfig {
    /// Whether any filter narrows the view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.type_filter != TypeFilter::All
            || self.status_filter != StatusFilter::All
            || self.time_filter != TimeFilter::All
    }

    /// Resets every filter to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Evaluates the filter against a single item.
    ///
    /// # Arguments
    ///
    /// * `entry` - The item to test
    /// * `now` - Current time; calendar comparisons use its offset
    ///
    /// # Returns
    ///
    /// `true` if every predicate matches.
    #[must_use]
    pub fn matches<T: Filterable>(&self, entry: &T, now: DateTime<FixedOffset>) -> bool {
        Matcher::new(self, now).matches(entry)
    }
}

/// Filter configuration with its derived values computed once per evaluation.
struct Matcher<'a> {
    config: &'a FilterConfig,
    needle: String,
    now: DateTime<FixedOffset>,
    week_start: DateTime<Utc>,
    month_start: DateTime<Utc>,
}

impl<'a> Matcher<'a> {
    fn new(config: &'a FilterConfig, now: DateTime<FixedOffset>) -> Self {
        let week_start = (now - Duration::days(7)).with_timezone(&Utc);
        let month_start = month_start(now);
        Self {
            config,
            needle: config.search_term.to_lowercase(),
            now,
            week_start,
            month_start,
        }
    }

    fn matches<T: Filterable>(&self, entry: &T) -> bool {
        let item = entry.item();
        self.matches_text(item)
            && self.config.type_filter.matches(item.kind)
            && self.config.status_filter.matches(entry.status())
            && self.matches_time(item.created_at)
    }

    fn matches_text(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            &item.item_name,
            &item.description,
            &item.location,
            &item.contact_info,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    fn matches_time(&self, created_at: DateTime<Utc>) -> bool {
        match self.config.time_filter {
            TimeFilter::All => true,
            TimeFilter::Today => {
                created_at.with_timezone(&self.now.timezone()).date_naive()
                    == self.now.date_naive()
            }
            TimeFilter::Week => created_at >= self.week_start,
            TimeFilter::Month => created_at >= self.month_start,
            TimeFilter::Custom => match (self.config.custom_range.start, self.config.custom_range.end) {
                (Some(start), Some(end)) => created_at >= start && created_at <= end,
                _ => true,
            },
        }
    }
}

/// Midnight, in `now`'s offset, of the date one calendar month before `now`.
///
/// The day is clamped to the length of the previous month (31 March gives 28
/// or 29 February). It is never rolled over into the following month, so the
/// window does not shrink to 2 March the way day-overflowing date arithmetic
/// would make it.
fn month_start(now: DateTime<FixedOffset>) -> DateTime<Utc> {
    let today = now.date_naive();
    let date = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    now.timezone()
        .from_local_datetime(&midnight)
        .single()
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Filters items against a configuration, preserving their order.
///
/// # Arguments
///
/// * `items` - Items to filter (one partition)
/// * `config` - Filter configuration
/// * `now` - Current time
///
/// # Returns
///
/// The matching items.
pub fn filter_items<T>(items: &[T], config: &FilterConfig, now: DateTime<FixedOffset>) -> Vec<T>
where
    T: Filterable + Clone + Send + Sync,
{
    const PARALLEL_THRESHOLD: usize = 1_000;

    let matcher = Matcher::new(config, now);

    if items.len() >= PARALLEL_THRESHOLD {
        items
            .par_iter()
            .filter(|entry| matcher.matches(*entry))
            .cloned()
            .collect()
    } else {
        items
            .iter()
            .filter(|entry| matcher.matches(*entry))
            .cloned()
            .collect()
    }
}
