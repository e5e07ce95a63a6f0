//! Common test utilities: in-memory backing store and service builders

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use system_settings::contract::{SettingRecord, SubscribeCallback};
use system_settings::domain::{SchemaRegistry, Service, SettingsRepository};
use tokio::sync::{mpsc, Notify};

/// In-memory backing store with call counters and failure switches
#[derive(Default)]
pub struct MockSettingsRepo {
    data: RwLock<BTreeMap<String, String>>,
    find_all_calls: AtomicUsize,
    find_by_name_calls: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        for (name, content) in records {
            repo.put_direct(name, content);
        }
        repo
    }

    /// Write straight to the store, bypassing the service (another process)
    pub fn put_direct(&self, name: &str, content: &str) {
        self.data
            .write()
            .insert(name.to_string(), content.to_string());
    }

    pub fn stored(&self, name: &str) -> Option<String> {
        self.data.read().get(name).cloned()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_name_calls(&self) -> usize {
        self.find_by_name_calls.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> anyhow::Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("database unavailable");
        }
        Ok(())
    }

    fn check_write(&self) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("write rejected");
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<SettingRecord>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        Ok(self
            .data
            .read()
            .iter()
            .map(|(name, content)| SettingRecord::new(name.clone(), content.clone()))
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<SettingRecord>> {
        self.find_by_name_calls.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        Ok(self
            .data
            .read()
            .get(name)
            .map(|content| SettingRecord::new(name, content.clone())))
    }

    async fn insert(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.check_write()?;
        let mut data = self.data.write();
        if data.contains_key(&record.name) {
            anyhow::bail!("duplicate key: {}", record.name);
        }
        data.insert(record.name.clone(), record.content.clone());
        Ok(())
    }

    async fn update(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.check_write()?;
        match self.data.write().get_mut(&record.name) {
            Some(content) => {
                *content = record.content.clone();
                Ok(())
            }
            None => anyhow::bail!("setting '{}' does not exist", record.name),
        }
    }

    async fn upsert(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.check_read()?;
        self.check_write()?;
        self.data
            .write()
            .insert(record.name.clone(), record.content.clone());
        Ok(())
    }
}

/// Store whose next `find_by_name` can be held after it has read its result
///
/// Lets a test interleave another operation between a lookup and whatever the
/// caller does with the looked-up value.
#[derive(Default)]
pub struct PausingRepo {
    inner: MockSettingsRepo,
    pause_next_lookup: AtomicBool,
    paused: Notify,
    resume: Notify,
}

impl PausingRepo {
    pub fn new(inner: MockSettingsRepo) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn pause_next_lookup(&self) {
        self.pause_next_lookup.store(true, Ordering::SeqCst);
    }

    /// Wait until a lookup is being held
    pub async fn wait_until_paused(&self) {
        self.paused.notified().await;
    }

    pub fn resume(&self) {
        self.resume.notify_one();
    }

    pub fn stored(&self, name: &str) -> Option<String> {
        self.inner.stored(name)
    }
}

#[async_trait]
impl SettingsRepository for PausingRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<SettingRecord>> {
        self.inner.find_all().await
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<SettingRecord>> {
        let result = self.inner.find_by_name(name).await;
        if self.pause_next_lookup.swap(false, Ordering::SeqCst) {
            self.paused.notify_one();
            self.resume.notified().await;
        }
        result
    }

    async fn insert(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.inner.insert(record).await
    }

    async fn update(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.inner.update(record).await
    }

    async fn upsert(&self, record: &SettingRecord) -> anyhow::Result<()> {
        self.inner.upsert(record).await
    }
}

/// Registry used across tests: `a`, `b`, `grafana` and `k8s_cluster`
pub fn test_schema() -> SchemaRegistry {
    SchemaRegistry::new()
        .with_field("a", "0")
        .with_field("b", "2")
        .with_field("grafana", "{}")
        .with_field("k8s_cluster", r#"{"list":[]}"#)
}

pub fn create_test_service_with_repo(repo: MockSettingsRepo) -> (Arc<Service>, Arc<MockSettingsRepo>) {
    let repo = Arc::new(repo);
    let service = Arc::new(Service::new(repo.clone(), Arc::new(test_schema())));
    (service, repo)
}

pub fn create_pausing_service(repo: MockSettingsRepo) -> (Arc<Service>, Arc<PausingRepo>) {
    let repo = Arc::new(PausingRepo::new(repo));
    let service = Arc::new(Service::new(repo.clone(), Arc::new(test_schema())));
    (service, repo)
}

pub fn create_test_service() -> (Arc<Service>, Arc<MockSettingsRepo>) {
    create_test_service_with_repo(MockSettingsRepo::new())
}

/// Subscriber callback that forwards every value into a channel
pub fn channel_callback() -> (SubscribeCallback, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: SubscribeCallback = Arc::new(move |value: String| {
        let _ = tx.send(value);
    });
    (callback, rx)
}

/// Next delivered value, or `None` if nothing arrives within `wait`
pub async fn next_value(rx: &mut mpsc::UnboundedReceiver<String>, wait: Duration) -> Option<String> {
    tokio::time::timeout(wait, rx.recv()).await.ok().flatten()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
