//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::SettingRecord;
use chrono::{DateTime, Utc};

impl From<entity::Model> for SettingRecord {
    fn from(entity: entity::Model) -> Self {
        Self {
            name: entity.name,
            content: entity.content,
        }
    }
}

/// Active model for a brand new row, both timestamps set to `now`
pub fn new_active_model(record: &SettingRecord, now: DateTime<Utc>) -> entity::ActiveModel {
    use sea_orm::ActiveValue::Set;

    entity::ActiveModel {
        name: Set(record.name.clone()),
        content: Set(record.content.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
