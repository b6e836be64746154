//! Trait definitions for mockable dependencies.
//!
//! This module defines [`RecordStore`], the abstraction over the remote
//! record store consumed by the view-model. [`crate::store::RtdbClient`]
//! implements it against the real database; tests inject a mock.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically for testing.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::UserRecord;

/// Remote record store abstraction.
///
/// One collection of user records, keyed by id. Implementations report
/// failures as [`StoreError`] values rather than swallowing them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Write a new record keyed by `record.id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    async fn create(&self, record: &UserRecord) -> Result<(), StoreError>;

    /// Overwrite the fields of an existing key.
    ///
    /// Does not verify that the key previously existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    async fn update(&self, id: &str, name: &str, age: i64) -> Result<(), StoreError>;

    /// Delete the entry at the given key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the delete fails.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Return the complete current snapshot of the collection.
    ///
    /// A one-shot read, not a subscription. Malformed entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read fails.
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError>;
}
