//! Schema registry: which setting names exist and what they default to

use std::collections::BTreeMap;

/// A known setting and its default content
///
/// Fields are collected at link time, so any crate in the binary can extend
/// the built-in catalog with `inventory::submit!`.
#[derive(Debug, Clone, Copy)]
pub struct SettingField {
    pub name: &'static str,
    pub default: &'static str,
}

inventory::collect!(SettingField);

inventory::submit! { SettingField { name: "k8s_cluster", default: r#"{"list":[]}"# } }
inventory::submit! { SettingField { name: "grafana", default: r#"{"host":"","header_name":"X-WEBAUTH-USER","api_dashboard_addr":"","instance_dashboard_addr":"","overview_dashboard_addr":""}"# } }
inventory::submit! { SettingField { name: "gateway", default: "[]" } }
inventory::submit! { SettingField { name: "version", default: "[]" } }
inventory::submit! { SettingField { name: "config_dep", default: "[]" } }
inventory::submit! { SettingField { name: "etcd_version", default: "v3" } }

/// Lookup interface over the known setting names
pub trait SettingSchema: Send + Sync {
    /// Whether `name` is a recognized setting
    fn is_valid_name(&self, name: &str) -> bool;

    /// Default content for `name`, if it is known
    fn default_for(&self, name: &str) -> Option<String>;

    /// All known setting names
    fn names(&self) -> Vec<String>;
}

/// In-memory schema registry
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    fields: BTreeMap<String, String>,
}

impl SchemaRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry built from every `SettingField` submitted to the catalog
    pub fn builtin() -> Self {
        inventory::iter::<SettingField>
            .into_iter()
            .fold(Self::new(), |registry, field| {
                registry.with_field(field.name, field.default)
            })
    }

    /// Add (or replace) a known field
    pub fn with_field(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.fields.insert(name.into(), default.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl SettingSchema for SchemaRegistry {
    fn is_valid_name(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn default_for(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}
