// Rust guideline compliant 2026-10-19

//! In-memory backend for exercising the admin services.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use lostfound_client::{AdminPage, Backend, ClientError, Result};
use lostfound_core::{ItemId, ItemKind, ItemRecord, ItemStatus};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// A request the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List { offset: u64, limit: u32 },
    Approve(ItemId),
    Reject(ItemId),
    Claim { id: ItemId, claimed_by: String },
}

/// Pauses the first listing request until released.
#[derive(Debug, Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
    armed: AtomicBool,
}

/// Scripted backend: raw JSON pages keyed by offset, one status for every
/// mutation.
#[derive(Debug)]
pub struct FakeBackend {
    pages: Mutex<HashMap<u64, Vec<Value>>>,
    failing_offset: Mutex<Option<u64>>,
    mutation_status: Mutex<u16>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Gate>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            failing_offset: Mutex::new(None),
            mutation_status: Mutex::new(200),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated() -> Self {
        let gate = Gate::default();
        gate.armed.store(true, Ordering::SeqCst);
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn with_page(self, offset: u64, records: Vec<ItemRecord>) -> Self {
        self.set_page(offset, records);
        self
    }

    /// Serves arbitrary JSON elements, valid records or not.
    pub fn with_raw_page(self, offset: u64, values: Vec<Value>) -> Self {
        self.pages.lock().unwrap().insert(offset, values);
        self
    }

    pub fn set_page(&self, offset: u64, records: Vec<ItemRecord>) {
        let values = records
            .iter()
            .map(|record| serde_json::to_value(record).unwrap())
            .collect();
        self.pages.lock().unwrap().insert(offset, values);
    }

    pub fn clear_pages(&self) {
        self.pages.lock().unwrap().clear();
    }

    pub fn fail_at(self, offset: u64) -> Self {
        *self.failing_offset.lock().unwrap() = Some(offset);
        self
    }

    pub fn set_mutation_status(&self, status: u16) {
        *self.mutation_status.lock().unwrap() = status;
    }

    pub fn gate(&self) -> &Gate {
        self.gate.as_ref().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::List { .. }))
            .count()
    }

    pub fn mutation_calls(&self) -> usize {
        self.calls().len() - self.list_calls()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_result(&self) -> Result<()> {
        let status = *self.mutation_status.lock().unwrap();
        if status == 200 {
            Ok(())
        } else {
            Err(ClientError::Status {
                status,
                message: "Internal Server Error".to_string(),
            })
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list_admin_items(&self, offset: u64, limit: u32) -> Result<AdminPage> {
        self.record(Call::List { offset, limit });
        if let Some(gate) = &self.gate {
            if gate.armed.swap(false, Ordering::SeqCst) {
                gate.entered.notify_one();
                gate.release.notified().await;
            }
        }
        if *self.failing_offset.lock().unwrap() == Some(offset) {
            return Err(ClientError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        let values = self
            .pages
            .lock()
            .unwrap()
            .get(&offset)
            .cloned()
            .unwrap_or_default();
        Ok(AdminPage::from_values(values))
    }

    async fn approve_item(&self, id: ItemId) -> Result<()> {
        self.record(Call::Approve(id));
        self.mutation_result()
    }

    async fn reject_item(&self, id: ItemId) -> Result<()> {
        self.record(Call::Reject(id));
        self.mutation_result()
    }

    async fn mark_claimed(&self, id: ItemId, claimed_by: &str) -> Result<()> {
        self.record(Call::Claim {
            id,
            claimed_by: claimed_by.to_string(),
        });
        self.mutation_result()
    }
}

/// Builds an admin record with the given id and status.
pub fn record(id: ItemId, status: ItemStatus) -> ItemRecord {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let (claimed_by, claim_time) = if status == ItemStatus::Claimed {
        (Some("Dana".to_string()), Some(base + Duration::days(2)))
    } else {
        (None, None)
    };
    ItemRecord {
        id,
        item_name: format!("Item {id}"),
        description: "Left behind".to_string(),
        image_id: None,
        location: "Main hall".to_string(),
        contact_info: "desk@example.org".to_string(),
        lost_time: base + Duration::hours(id),
        kind: if id % 2 == 0 { ItemKind::Found } else { ItemKind::Lost },
        created_at: base + Duration::hours(id),
        status,
        claimed_by,
        claim_time,
    }
}

/// Records for an inclusive id range; `pending` ids are pending, the rest published.
pub fn records(ids: std::ops::RangeInclusive<ItemId>, pending: &[ItemId]) -> Vec<ItemRecord> {
    ids.map(|id| {
        let status = if pending.contains(&id) {
            ItemStatus::Pending
        } else {
            ItemStatus::Published
        };
        record(id, status)
    })
    .collect()
}

/// Backend serving the two-page listing used across tests: ids 5-14 then
/// 14-20 with id 9 pending.
pub fn two_page_backend() -> FakeBackend {
    FakeBackend::new()
        .with_page(0, records(5..=14, &[9]))
        .with_page(10, records(14..=20, &[]))
}
