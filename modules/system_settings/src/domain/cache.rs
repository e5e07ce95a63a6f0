//! In-memory setting cache

use crate::contract::SettingRecord;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Name -> content cache shared by readers, writers and the refresher
///
/// The lock is only held for the map access itself. Entries are never evicted;
/// the key space is bounded by the schema registry.
#[derive(Debug, Default)]
pub struct SettingCache {
    entries: RwLock<HashMap<String, String>>,
}

impl SettingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, name: &str) -> Option<String> {
        self.entries.read().get(name).cloned()
    }

    pub fn write(&self, name: &str, value: &str) {
        self.entries
            .write()
            .insert(name.to_string(), value.to_string());
    }

    /// Cache `value` unless an entry already exists, returning the cached value
    ///
    /// Used on read misses so a value loaded before a concurrent write never
    /// replaces what that write cached.
    pub fn insert_if_absent(&self, name: &str, value: String) -> String {
        self.entries
            .write()
            .entry(name.to_string())
            .or_insert(value)
            .clone()
    }

    /// Overwrite entries with freshly loaded records, keeping cache-only entries
    pub fn merge(&self, records: Vec<SettingRecord>) {
        let mut entries = self.entries.write();
        for record in records {
            entries.insert(record.name, record.content);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_entry() {
        let cache = SettingCache::new();
        assert_eq!(cache.read("grafana"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let cache = SettingCache::new();
        cache.write("grafana", "{}");
        cache.write("grafana", r#"{"host":"g"}"#);
        assert_eq!(cache.read("grafana").as_deref(), Some(r#"{"host":"g"}"#));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_if_absent_keeps_existing_entry() {
        let cache = SettingCache::new();
        assert_eq!(cache.insert_if_absent("a", "loaded".to_string()), "loaded");

        cache.write("a", "written");
        assert_eq!(cache.insert_if_absent("a", "stale".to_string()), "written");
        assert_eq!(cache.read("a").as_deref(), Some("written"));
    }

    #[test]
    fn test_merge_overwrites_but_keeps_cache_only_entries() {
        let cache = SettingCache::new();
        cache.write("a", "old");
        cache.write("local", "only-here");

        cache.merge(vec![
            SettingRecord::new("a", "new"),
            SettingRecord::new("b", "2"),
        ]);

        assert_eq!(cache.read("a").as_deref(), Some("new"));
        assert_eq!(cache.read("b").as_deref(), Some("2"));
        assert_eq!(cache.read("local").as_deref(), Some("only-here"));
        assert_eq!(cache.len(), 3);
    }
}
