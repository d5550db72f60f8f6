// Rust guideline compliant 2026-10-19

//! Unit tests for the filter engine and stats aggregation.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use lostfound_core::{
    filter_items, ApprovedItem, ApprovedStatus, DateRange, FilterConfig, Item, ItemKind,
    PendingItem, Stats, StatusFilter, TimeFilter, TypeFilter,
};

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-05-10T12:00:00+08:00").expect("valid timestamp")
}

fn utc(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn item(id: i64, name: &str, kind: ItemKind, created_at: DateTime<Utc>) -> Item {
    Item {
        id,
        item_name: name.to_string(),
        description: format!("{} description", name),
        image_id: None,
        location: "Main Hall".to_string(),
        contact_info: format!("owner{}@example.org", id),
        lost_time: created_at,
        kind,
        created_at,
    }
}

fn pending(id: i64, name: &str, kind: ItemKind) -> PendingItem {
    PendingItem::new(item(id, name, kind, utc("2024-05-10T01:00:00Z")))
}

fn approved(id: i64, name: &str, status: ApprovedStatus) -> ApprovedItem {
    ApprovedItem {
        item: item(id, name, ItemKind::Found, utc("2024-05-10T01:00:00Z")),
        status,
    }
}

fn claimed() -> ApprovedStatus {
    ApprovedStatus::Claimed {
        claimed_by: Some("Alice".to_string()),
        claim_time: Some(utc("2024-05-10T02:00:00Z")),
    }
}

fn sample_approved() -> Vec<ApprovedItem> {
    vec![
        approved(30, "Wallet", ApprovedStatus::Published),
        approved(20, "Keys", claimed()),
        approved(10, "Scarf", ApprovedStatus::Rejected),
    ]
}

fn created(id: i64, created_at: &str) -> PendingItem {
    PendingItem::new(item(id, "Thing", ItemKind::Lost, utc(created_at)))
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}

#[test]
fn test_default_config_is_identity() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost), pending(2, "Bag", ItemKind::Found)];
    let approved_items = sample_approved();
    let config = FilterConfig::default();

    assert_eq!(filter_items(&pending_items, &config, now()), pending_items);
    assert_eq!(filter_items(&approved_items, &config, now()), approved_items);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost), pending(2, "Bag", ItemKind::Found)];

    let by_name = FilterConfig {
        search_term: "PHO".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&pending_items, &by_name, now()), PendingItem::id), vec![3]);

    let by_contact = FilterConfig {
        search_term: "Owner2@".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&pending_items, &by_contact, now()), PendingItem::id), vec![2]);

    let by_location = FilterConfig {
        search_term: "main hall".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(filter_items(&pending_items, &by_location, now()).len(), 2);
}

#[test]
fn test_type_filter() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost), pending(2, "Bag", ItemKind::Found)];
    let config = FilterConfig {
        type_filter: TypeFilter::Found,
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&pending_items, &config, now()), PendingItem::id), vec![2]);
}

#[test]
fn test_status_filter_pending_only_matches_pending_partition() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost)];
    let approved_items = sample_approved();
    let config = FilterConfig {
        status_filter: StatusFilter::Pending,
        ..FilterConfig::default()
    };

    assert_eq!(filter_items(&pending_items, &config, now()).len(), 1);
    assert!(filter_items(&approved_items, &config, now()).is_empty());
}

#[test]
fn test_concrete_status_excludes_pending_partition() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost)];
    let approved_items = sample_approved();
    let config = FilterConfig {
        status_filter: StatusFilter::Claimed,
        ..FilterConfig::default()
    };

    assert!(filter_items(&pending_items, &config, now()).is_empty());
    assert_eq!(ids(&filter_items(&approved_items, &config, now()), ApprovedItem::id), vec![20]);
}

#[test]
fn test_today_uses_calendar_date_of_now() {
    // 2024-05-09T17:00Z is 2024-05-10 01:00 at +08:00; 15:00Z is still the 9th.
    let items = vec![
        created(1, "2024-05-09T17:00:00Z"),
        created(2, "2024-05-09T15:00:00Z"),
        created(3, "2024-05-10T15:59:59Z"),
    ];
    let config = FilterConfig {
        time_filter: TimeFilter::Today,
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&items, &config, now()), PendingItem::id), vec![1, 3]);
}

#[test]
fn test_week_is_trailing_seven_days() {
    let week_ago = now().with_timezone(&Utc) - Duration::days(7);
    let items = vec![
        PendingItem::new(item(1, "A", ItemKind::Lost, week_ago)),
        PendingItem::new(item(2, "B", ItemKind::Lost, week_ago - Duration::seconds(1))),
    ];
    let config = FilterConfig {
        time_filter: TimeFilter::Week,
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&items, &config, now()), PendingItem::id), vec![1]);
}

#[test]
fn test_month_starts_at_local_midnight_one_month_back() {
    // Now is 2024-05-10 at +08:00, so the window opens 2024-04-10T00:00+08:00.
    let items = vec![
        created(1, "2024-04-09T16:00:00Z"),
        created(2, "2024-04-09T15:59:59Z"),
    ];
    let config = FilterConfig {
        time_filter: TimeFilter::Month,
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&items, &config, now()), PendingItem::id), vec![1]);
}

#[test]
fn test_custom_range_is_inclusive() {
    let items = vec![
        created(1, "2024-05-01T00:00:00Z"),
        created(2, "2024-05-05T00:00:00Z"),
        created(3, "2024-05-05T00:00:01Z"),
    ];
    let config = FilterConfig {
        time_filter: TimeFilter::Custom,
        custom_range: DateRange {
            start: Some(utc("2024-05-01T00:00:00Z")),
            end: Some(utc("2024-05-05T00:00:00Z")),
        },
        ..FilterConfig::default()
    };
    assert_eq!(ids(&filter_items(&items, &config, now()), PendingItem::id), vec![1, 2]);
}

#[test]
fn test_custom_range_with_missing_bound_passes_everything() {
    let items = vec![created(1, "2020-01-01T00:00:00Z"), created(2, "2024-05-05T00:00:00Z")];
    let config = FilterConfig {
        time_filter: TimeFilter::Custom,
        custom_range: DateRange {
            start: Some(utc("2024-05-01T00:00:00Z")),
            end: None,
        },
        ..FilterConfig::default()
    };
    assert_eq!(filter_items(&items, &config, now()).len(), 2);
}

#[test]
fn test_predicates_are_combined_with_and() {
    let approved_items = sample_approved();
    let config = FilterConfig {
        search_term: "wallet".to_string(),
        status_filter: StatusFilter::Claimed,
        ..FilterConfig::default()
    };
    assert!(filter_items(&approved_items, &config, now()).is_empty());
}

#[test]
fn test_stats_follow_filtered_partitions() {
    let pending_items = vec![pending(3, "Phone", ItemKind::Lost), pending(2, "Bag", ItemKind::Found)];
    let approved_items = sample_approved();

    let all = Stats::from_filtered(&pending_items, &approved_items);
    assert_eq!(
        all,
        Stats {
            pending: 2,
            published: 1,
            claimed: 1,
            total: 5,
        }
    );

    let config = FilterConfig {
        type_filter: TypeFilter::Lost,
        ..FilterConfig::default()
    };
    let filtered = Stats::from_filtered(
        &filter_items(&pending_items, &config, now()),
        &filter_items(&approved_items, &config, now()),
    );
    assert_eq!(
        filtered,
        Stats {
            pending: 1,
            published: 0,
            claimed: 0,
            total: 1,
        }
    );
}

#[test]
fn test_large_partitions_keep_order() {
    let items: Vec<PendingItem> = (0..2_500)
        .rev()
        .map(|id| pending(id, if id % 2 == 0 { "Even" } else { "Odd" }, ItemKind::Lost))
        .collect();
    let config = FilterConfig {
        search_term: "even".to_string(),
        ..FilterConfig::default()
    };
    let filtered = filter_items(&items, &config, now());
    assert_eq!(filtered.len(), 1_250);
    assert!(filtered.windows(2).all(|pair| pair[0].id() > pair[1].id()));
}
