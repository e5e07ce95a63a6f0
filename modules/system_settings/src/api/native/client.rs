//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{K8sClusterSetting, SettingsApi, SettingsError, SubscribeCallback};
use crate::domain::Service;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn get(&self, name: &str) -> Result<String, SettingsError> {
        self.service.get(name).await
    }

    async fn get_all(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        self.service.get_all().await
    }

    async fn create(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.service.create(name, value).await
    }

    async fn set(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.service.set(name, value).await
    }

    async fn subscribe(&self, name: &str, callback: SubscribeCallback, deliver_current: bool) {
        self.service
            .subscribe(name, callback, deliver_current)
            .await
    }

    async fn k8s_cluster_setting(&self) -> Result<K8sClusterSetting, SettingsError> {
        self.service.k8s_cluster_setting().await
    }
}
