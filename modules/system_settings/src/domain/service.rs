//! Domain service - business logic orchestration

use super::cache::SettingCache;
use super::refresher;
use super::repository::SettingsRepository;
use super::schema::SettingSchema;
use super::subscriptions::SubscriberRegistry;
use crate::contract::{
    K8sClusterSetting, SettingRecord, SettingsError, SubscribeCallback, K8S_CLUSTER_SETTING_NAME,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Domain service for system settings
pub struct Service {
    settings_repo: Arc<dyn SettingsRepository>,
    schema: Arc<dyn SettingSchema>,
    cache: Arc<SettingCache>,
    subscribers: SubscriberRegistry,
}

impl Service {
    /// Create a new service instance
    ///
    /// The cache starts empty; call [`Service::spawn_refresher`] to keep it in
    /// sync with the backing store.
    pub fn new(settings_repo: Arc<dyn SettingsRepository>, schema: Arc<dyn SettingSchema>) -> Self {
        Self {
            settings_repo,
            schema,
            cache: Arc::new(SettingCache::new()),
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Start the periodic cache refresh, stopped by `cancel`
    pub fn spawn_refresher(&self, period: Duration, cancel: CancellationToken) -> JoinHandle<()> {
        refresher::spawn_refresher(
            self.cache.clone(),
            self.settings_repo.clone(),
            period,
            cancel,
        )
    }

    /// Run a single refresh tick now
    pub async fn refresh_cache(&self) -> Result<usize, SettingsError> {
        Ok(refresher::refresh_once(&self.cache, self.settings_repo.as_ref()).await?)
    }

    // ===== Reads =====

    /// Get a setting, cache first
    ///
    /// A missing record resolves to the schema default or an empty string, and
    /// whatever was resolved is cached. A write that lands in the cache while
    /// the store read is in flight wins over the loaded value.
    pub async fn get(&self, name: &str) -> Result<String, SettingsError> {
        if let Some(value) = self.cache.read(name) {
            return Ok(value);
        }

        tracing::debug!(setting = name, "Setting cache miss");
        let value = self.load(name).await?;
        Ok(self.cache.insert_if_absent(name, value))
    }

    /// Snapshot of all known settings straight from the backing store
    ///
    /// Unknown names are dropped and known names without a record get their default.
    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        let records = self.settings_repo.find_all().await?;

        let mut settings: BTreeMap<String, String> = records
            .into_iter()
            .filter(|record| self.schema.is_valid_name(&record.name))
            .map(|record| (record.name, record.content))
            .collect();

        for name in self.schema.names() {
            if !settings.contains_key(&name) {
                let default = self.schema.default_for(&name).unwrap_or_default();
                settings.insert(name, default);
            }
        }

        Ok(settings)
    }

    /// Decode a setting's content as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, SettingsError> {
        let content = self.get(name).await?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Decode {
            name: name.to_string(),
            source,
        })
    }

    /// Kubernetes cluster configuration
    pub async fn k8s_cluster_setting(&self) -> Result<K8sClusterSetting, SettingsError> {
        self.get_json(K8S_CLUSTER_SETTING_NAME).await
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.schema.is_valid_name(name)
    }

    // ===== Writes =====

    /// Write a setting only if no record exists yet
    ///
    /// An existing record makes this a silent no-op: nothing is written,
    /// cached or published. Losing an insert race to another writer counts as
    /// an existing record.
    pub async fn create(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        if self.settings_repo.find_by_name(name).await?.is_some() {
            tracing::debug!(setting = name, "Setting already exists, create skipped");
            return Ok(());
        }

        if let Err(e) = self.settings_repo.insert(&SettingRecord::new(name, value)).await {
            if matches!(self.settings_repo.find_by_name(name).await, Ok(Some(_))) {
                tracing::debug!(setting = name, error = %e, "Setting created concurrently, create skipped");
                return Ok(());
            }
            return Err(e.into());
        }

        self.cache.write(name, value);
        self.subscribers.publish(name, value);
        Ok(())
    }

    /// Insert or update a setting in one transaction
    ///
    /// Cache and subscribers are only touched once the transaction committed.
    pub async fn set(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.settings_repo
            .upsert(&SettingRecord::new(name, value))
            .await?;

        self.cache.write(name, value);
        self.subscribers.publish(name, value);
        Ok(())
    }

    // ===== Subscriptions =====

    /// Register a change callback
    ///
    /// Unknown names are ignored. With `deliver_current` the callback is invoked
    /// once, before returning, with the value currently in the backing store;
    /// a failed read skips that delivery but keeps the subscription.
    ///
    /// The callback is registered before the current value is read, so a
    /// concurrent write may reach the callback ahead of the immediate delivery
    /// of the older value.
    pub async fn subscribe(&self, name: &str, callback: SubscribeCallback, deliver_current: bool) {
        if !self.schema.is_valid_name(name) {
            tracing::debug!(setting = name, "Ignoring subscription to unknown setting");
            return;
        }

        self.subscribers.register(name, callback.clone());

        if deliver_current {
            match self.load(name).await {
                Ok(content) => callback(content),
                Err(e) => {
                    tracing::debug!(setting = name, error = %e, "Initial delivery skipped");
                }
            }
        }
    }

    pub fn subscriber_count(&self, name: &str) -> usize {
        self.subscribers.count(name)
    }

    // ===== Helper Methods =====

    /// Read from the backing store, resolving absence to default or empty
    async fn load(&self, name: &str) -> Result<String, SettingsError> {
        match self.settings_repo.find_by_name(name).await? {
            Some(record) => Ok(record.content),
            None => Ok(self.schema.default_for(name).unwrap_or_default()),
        }
    }
}
