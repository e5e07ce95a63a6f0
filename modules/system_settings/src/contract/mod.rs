//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::{
    K8sCluster, K8sClusterSetting, SettingRecord, SubscribeCallback, K8S_CLUSTER_SETTING_NAME,
};
