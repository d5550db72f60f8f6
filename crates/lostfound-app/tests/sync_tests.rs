// Rust guideline compliant 2026-10-19

mod common;

use common::{records, two_page_backend, Call, FakeBackend};
use lostfound_app::{AdminConsole, SyncOutcome};
use lostfound_core::{ItemRecord, ItemStatus};
use std::num::NonZeroU32;
use std::sync::Arc;

fn page_size(size: u32) -> NonZeroU32 {
    NonZeroU32::new(size).unwrap()
}

#[tokio::test]
async fn test_overlapping_pages_collapse_to_unique_ids() {
    let backend = Arc::new(two_page_backend());
    let console = AdminConsole::new(Arc::clone(&backend));

    let outcome = console.refresh(page_size(10)).await;

    assert_eq!(
        outcome,
        SyncOutcome::Completed {
            pages: 2,
            received: 17,
            merged: 16,
        }
    );
    assert_eq!(
        backend.calls(),
        vec![
            Call::List { offset: 0, limit: 10 },
            Call::List { offset: 10, limit: 10 },
        ]
    );

    let snapshot = console.snapshot();
    assert_eq!(snapshot.len(), 16);
    let pending: Vec<_> = snapshot.pending().iter().map(|item| item.id()).collect();
    assert_eq!(pending, vec![9]);
    let approved: Vec<_> = snapshot.approved().iter().map(|item| item.id()).collect();
    assert_eq!(approved.first(), Some(&20));
    assert!(approved.windows(2).all(|pair| pair[0] > pair[1]));
}

#[tokio::test]
async fn test_empty_backend_stops_after_one_request() {
    let backend = Arc::new(FakeBackend::new());
    let console = AdminConsole::new(Arc::clone(&backend));

    let outcome = console.refresh(page_size(10)).await;

    assert!(outcome.is_complete());
    assert_eq!(backend.list_calls(), 1);
    assert!(console.snapshot().is_empty());
}

#[tokio::test]
async fn test_exact_multiple_needs_a_trailing_empty_page() {
    let backend = Arc::new(
        FakeBackend::new()
            .with_page(0, records(1..=5, &[]))
            .with_page(5, records(6..=10, &[])),
    );
    let console = AdminConsole::new(Arc::clone(&backend));

    console.refresh(page_size(5)).await;

    assert_eq!(backend.list_calls(), 3);
    assert_eq!(console.snapshot().len(), 10);
}

#[tokio::test]
async fn test_failure_keeps_partial_progress() {
    let backend = Arc::new(
        FakeBackend::new()
            .with_page(0, records(5..=14, &[9]))
            .fail_at(10),
    );
    let console = AdminConsole::new(Arc::clone(&backend));

    let outcome = console.refresh(page_size(10)).await;

    match outcome {
        SyncOutcome::Aborted { pages, merged, error } => {
            assert_eq!(pages, 1);
            assert_eq!(merged, 10);
            assert!(error.contains("500"));
        }
        other => panic!("expected abort, got {other:?}"),
    }
    assert_eq!(console.snapshot().len(), 10);
    assert!(!console.sync().is_running());
}

#[tokio::test]
async fn test_guard_released_after_failure() {
    let backend = Arc::new(FakeBackend::new().fail_at(0));
    let console = AdminConsole::new(Arc::clone(&backend));

    assert!(matches!(
        console.refresh(page_size(10)).await,
        SyncOutcome::Aborted { .. }
    ));
    assert!(matches!(
        console.refresh(page_size(10)).await,
        SyncOutcome::Aborted { .. }
    ));
    assert_eq!(backend.list_calls(), 2);
}

#[tokio::test]
async fn test_new_pass_replaces_previous_state() {
    let backend = Arc::new(two_page_backend());
    let console = AdminConsole::new(Arc::clone(&backend));
    console.refresh(page_size(10)).await;
    assert_eq!(console.snapshot().len(), 16);

    backend.clear_pages();
    backend.set_page(0, records(1..=3, &[2]));
    console.refresh(page_size(10)).await;

    let snapshot = console.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert!(!snapshot.contains(20));
    assert!(snapshot.find_pending(2).is_some());
}

#[tokio::test]
async fn test_concurrent_sync_is_skipped_without_requests() {
    let backend = Arc::new(two_page_backend_gated());
    let console = AdminConsole::new(Arc::clone(&backend));

    let (first, second) = tokio::join!(console.refresh(page_size(10)), async {
        backend.gate().entered.notified().await;
        assert!(console.sync().is_running());
        let outcome = console.refresh(page_size(10)).await;
        backend.gate().release.notify_one();
        outcome
    });

    assert_eq!(second, SyncOutcome::Skipped);
    assert!(first.is_complete());
    assert_eq!(backend.list_calls(), 2);
}

#[tokio::test]
async fn test_subscribers_observe_sync_progress() {
    let backend = Arc::new(two_page_backend_gated());
    let console = AdminConsole::new(Arc::clone(&backend));
    let mut updates = console.store().subscribe();

    let (_, observed) = tokio::join!(console.refresh(page_size(10)), async {
        backend.gate().entered.notified().await;
        backend.gate().release.notify_one();
        let mut sizes = Vec::new();
        while updates.changed().await.is_ok() {
            let len = updates.borrow_and_update().len();
            sizes.push(len);
            if len == 16 {
                break;
            }
        }
        sizes
    });

    assert!(observed.contains(&16));
    assert!(observed.iter().all(|len| *len == 0 || *len == 10 || *len == 16));
}

#[tokio::test]
async fn test_claimed_record_without_claim_time_stays_approved() {
    let mut claimed: ItemRecord = common::record(7, ItemStatus::Claimed);
    claimed.claim_time = None;
    let mut anonymous: ItemRecord = common::record(6, ItemStatus::Claimed);
    anonymous.claimed_by = None;
    let backend = Arc::new(FakeBackend::new().with_page(
        0,
        vec![common::record(8, ItemStatus::Pending), claimed, anonymous],
    ));
    let console = AdminConsole::new(Arc::clone(&backend));

    let outcome = console.refresh(page_size(10)).await;

    assert!(outcome.is_complete());
    let snapshot = console.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.find_pending(8).is_some());

    let claimed = snapshot.find_approved(7).unwrap();
    assert_eq!(claimed.status(), ItemStatus::Claimed);
    assert_eq!(claimed.claimed_by(), Some("Dana"));
    assert_eq!(claimed.claim_time(), None);

    let anonymous = snapshot.find_approved(6).unwrap();
    assert_eq!(anonymous.status(), ItemStatus::Claimed);
    assert_eq!(anonymous.claimed_by(), None);
}

#[tokio::test]
async fn test_malformed_element_does_not_stop_pagination() {
    let mut first: Vec<serde_json::Value> = records(1..=10, &[])
        .iter()
        .map(|record| serde_json::to_value(record).unwrap())
        .collect();
    first[3]["status"] = serde_json::json!("archived");
    let backend = Arc::new(
        FakeBackend::new()
            .with_raw_page(0, first)
            .with_page(10, records(11..=12, &[11])),
    );
    let console = AdminConsole::new(Arc::clone(&backend));

    let outcome = console.refresh(page_size(10)).await;

    assert_eq!(
        outcome,
        SyncOutcome::Completed {
            pages: 2,
            received: 12,
            merged: 11,
        }
    );
    assert_eq!(
        backend.calls(),
        vec![
            Call::List { offset: 0, limit: 10 },
            Call::List { offset: 10, limit: 10 },
        ]
    );
    let snapshot = console.snapshot();
    assert!(snapshot.find_approved(4).is_none());
    assert!(snapshot.find_approved(3).is_some());
    assert!(snapshot.find_approved(5).is_some());
    assert!(snapshot.find_pending(11).is_some());
}

fn two_page_backend_gated() -> FakeBackend {
    FakeBackend::gated()
        .with_page(0, records(5..=14, &[9]))
        .with_page(10, records(14..=20, &[]))
}
