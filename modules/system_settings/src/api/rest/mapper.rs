//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract::SettingRecord;
use std::collections::BTreeMap;

impl From<SettingRecord> for SettingDto {
    fn from(record: SettingRecord) -> Self {
        Self {
            name: record.name,
            content: record.content,
        }
    }
}

impl From<BTreeMap<String, String>> for SettingsListResponse {
    fn from(items: BTreeMap<String, String>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
