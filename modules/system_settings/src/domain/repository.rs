//! Repository trait for data access
//!
//! This trait defines the backing store boundary.
//! The SeaORM implementation is in infra/storage/repositories.rs

use crate::contract::SettingRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Backing store for setting records
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// List every stored record
    async fn find_all(&self) -> Result<Vec<SettingRecord>>;

    /// Find a record by name
    ///
    /// `Ok(None)` is the not-found condition; any `Err` is a store failure.
    async fn find_by_name(&self, name: &str) -> Result<Option<SettingRecord>>;

    /// Insert a new record
    async fn insert(&self, record: &SettingRecord) -> Result<()>;

    /// Update the content of an existing record
    async fn update(&self, record: &SettingRecord) -> Result<()>;

    /// Insert or update inside a single transaction
    ///
    /// Any failure in the lookup, insert or update rolls the transaction back.
    async fn upsert(&self, record: &SettingRecord) -> Result<()>;
}
