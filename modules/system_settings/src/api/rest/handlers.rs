//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{SettingRecord, SettingsError};
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;

/// List every known setting
pub async fn list_settings(service: Arc<Service>) -> Result<Json<SettingsListResponse>, Problem> {
    let settings = service.get_all().await.map_err(map_domain_error)?;
    Ok(Json(settings.into()))
}

/// Get a single setting
pub async fn get_setting(
    service: Arc<Service>,
    Path(name): Path<String>,
) -> Result<Json<SettingDto>, Problem> {
    let content = service.get(&name).await.map_err(map_domain_error)?;
    Ok(Json(SettingRecord::new(name, content).into()))
}

/// Create a setting if it does not exist yet
pub async fn create_setting(
    service: Arc<Service>,
    Json(req): Json<CreateSettingRequest>,
) -> Result<StatusCode, Problem> {
    ensure_known(&service, &req.name)?;

    service
        .create(&req.name, &req.content)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create or overwrite a setting
pub async fn update_setting(
    service: Arc<Service>,
    Path(name): Path<String>,
    Json(req): Json<UpdateSettingRequest>,
) -> Result<Json<SettingDto>, Problem> {
    ensure_known(&service, &name)?;

    service
        .set(&name, &req.content)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SettingRecord::new(name, req.content).into()))
}

fn ensure_known(service: &Service, name: &str) -> Result<(), Problem> {
    if service.is_valid_name(name) {
        Ok(())
    } else {
        Err(map_domain_error(SettingsError::InvalidName {
            name: name.to_string(),
        }))
    }
}
