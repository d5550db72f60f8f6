// Rust guideline compliant 2026-10-19

//! Lostfound Core Library
//!
//! This crate provides the foundational components of the lost & found admin engine:
//! - Data models (Item, PendingItem, ApprovedItem, ItemStatus)
//! - Wire record decoding for the admin listing
//! - Status lifecycle (FSM) validation
//! - Partition reducer (dedup, ordering, confirmed mutations)
//! - Filter engine and stats aggregation
//! - Configuration and session models
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod filter;
pub mod fsm;
pub mod models;
pub mod partitions;
pub mod session;
pub mod stats;
pub mod wire;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use filter::{filter_items, DateRange, FilterConfig, Filterable, StatusFilter, TimeFilter, TypeFilter};
pub use models::{
    ApprovedItem, ApprovedStatus, Entry, Item, ItemId, ItemKind, ItemRecord, ItemStatus,
    PendingItem, StatusTone,
};
pub use partitions::{Action, Partitions};
pub use session::Session;
pub use stats::Stats;
