//! Domain layer - business logic and services

pub mod cache;
pub mod refresher;
pub mod repository;
pub mod schema;
pub mod service;
pub mod subscriptions;

pub use cache::SettingCache;
pub use repository::SettingsRepository;
pub use schema::{SchemaRegistry, SettingField, SettingSchema};
pub use service::Service;
pub use subscriptions::SubscriberRegistry;
