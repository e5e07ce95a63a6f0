//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/settings",
            get(list_settings_handler).post(create_setting_handler),
        )
        .route(
            "/settings/{name}",
            get(get_setting_handler).put(update_setting_handler),
        )
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<SettingsListResponse>, Problem> {
    handlers::list_settings(service).await
}

async fn get_setting_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<SettingDto>, Problem> {
    handlers::get_setting(service, path).await
}

async fn create_setting_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<CreateSettingRequest>,
) -> Result<StatusCode, Problem> {
    handlers::create_setting(service, json).await
}

async fn update_setting_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<UpdateSettingRequest>,
) -> Result<Json<SettingDto>, Problem> {
    handlers::update_setting(service, path, json).await
}
