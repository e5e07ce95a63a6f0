//! Contract models for system settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! Only the typed setting payloads carry serde derives, since they are decoded
//! from stored content.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Well-known name of the Kubernetes cluster setting
pub const K8S_CLUSTER_SETTING_NAME: &str = "k8s_cluster";

/// A persisted setting: unique name plus opaque string content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRecord {
    /// Setting name (natural key)
    pub name: String,
    /// Setting content, usually JSON but treated as an opaque string
    pub content: String,
}

impl SettingRecord {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Callback invoked with the new content whenever a subscribed setting changes
pub type SubscribeCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Content of the `k8s_cluster` setting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct K8sClusterSetting {
    #[serde(default)]
    pub list: Vec<K8sCluster>,
}

/// A single Kubernetes cluster entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct K8sCluster {
    pub name: String,
    /// Environments served by this cluster
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub zone_code: String,
    #[serde(default)]
    pub zone_name: String,
    pub domain: String,
    #[serde(default)]
    pub token: String,
}
