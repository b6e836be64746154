//! Remote record store.
//!
//! Client for the realtime key-value database that holds the authoritative
//! collection of [`UserRecord`]s under `users/{id}`. All filtering and
//! sorting happen client-side after a full fetch; there is no pagination and
//! no server-side query.

mod client;
mod config;
mod types;

pub use client::RtdbClient;
pub use config::{StoreConfig, DEFAULT_TIMEOUT_MS, USERS_PATH};
pub use types::UserRecord;
