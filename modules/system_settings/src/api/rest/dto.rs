//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single setting response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDto {
    /// Setting name
    pub name: String,

    /// Setting content
    pub content: String,
}

/// Create setting request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSettingRequest {
    pub name: String,
    pub content: String,
}

/// Update setting request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingRequest {
    pub content: String,
}

/// Every known setting, defaults included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsListResponse {
    /// Name -> content
    pub items: BTreeMap<String, String>,

    /// Total count
    pub total: usize,
}
