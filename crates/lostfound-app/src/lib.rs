// Rust guideline compliant 2026-10-19

//! Application services for the lost & found admin engine.
//!
//! This crate wires the core reducer to the backend: the store task that owns
//! the partitions, the paginated sync engine with its single-flight guard,
//! the confirm-then-apply mutation coordinator, dashboard view derivation,
//! and the on-disk workspace and session handling used by the CLI.

pub mod console;
pub mod dashboard;
pub mod error;
pub mod mutation;
pub mod public;
pub mod response;
pub mod session;
pub mod store;
pub mod sync;
pub mod time;
pub mod workspace;

pub use console::AdminConsole;
pub use dashboard::DashboardView;
pub use error::{AppError, ErrorCode, Result};
pub use mutation::MutationCoordinator;
pub use public::search_public;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::SessionStore;
pub use store::StoreHandle;
pub use sync::{SyncEngine, SyncOutcome};
pub use time::{local_now, parse_range_bound, RangeBound};
pub use workspace::WorkspaceContext;
