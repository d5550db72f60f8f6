// Rust guideline compliant 2026-10-19

//! HTTP client for the lost & found backend.
//!
//! [`Backend`] is the seam the sync engine and mutation coordinator talk to;
//! [`ApiClient`] implements it over `reqwest` and also exposes the public,
//! reporting, auth and file endpoints.

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use types::{AdminPage, ImageVariant, ItemReport, PublicItem};
