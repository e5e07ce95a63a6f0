//! System Settings Module
//!
//! Cached, notifying key-value configuration store. Settings are read through
//! an in-memory cache that is periodically refreshed from the database,
//! default to values from the setting catalog, and notify subscribers when
//! they change.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, K8sCluster, K8sClusterSetting, SettingRecord,
    SubscribeCallback,
};

pub mod module;
pub use module::SystemSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
