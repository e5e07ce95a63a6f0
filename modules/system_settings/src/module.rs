//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::SettingsApi;
use crate::domain::{SchemaRegistry, Service, SettingSchema, SettingsRepository};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::SeaOrmSettingsRepository;
use anyhow::Result;
use parking_lot::Mutex;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// System settings module
///
/// Owns the domain service and the background refresher task.
pub struct SystemSettingsModule {
    config: Config,
    service: Arc<Service>,
    cancel: CancellationToken,
    refresher: Mutex<Option<JoinHandle<()>>>,
}

impl SystemSettingsModule {
    /// Build the module on top of an open database connection
    ///
    /// Runs migrations when enabled and wires the built-in setting catalog.
    /// The cache refresher does not run yet; call [`SystemSettingsModule::start`]
    /// once the runtime is serving.
    pub async fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        if config.run_migrations {
            Migrator::up(&db, None).await?;
            tracing::info!("System settings migrations completed");
        }

        let settings_repo = Arc::new(SeaOrmSettingsRepository::new(Arc::new(db)));
        let schema = Arc::new(SchemaRegistry::builtin());
        tracing::info!(known_settings = schema.len(), "System settings initialized");

        Ok(Self::with_parts(config, settings_repo, schema))
    }

    /// Build the module from explicit collaborators
    pub fn with_parts(
        config: Config,
        settings_repo: Arc<dyn SettingsRepository>,
        schema: Arc<dyn SettingSchema>,
    ) -> Self {
        Self {
            config,
            service: Arc::new(Service::new(settings_repo, schema)),
            cancel: CancellationToken::new(),
            refresher: Mutex::new(None),
        }
    }

    /// Start the periodic cache refresh; a second call is a no-op
    pub fn start(&self) {
        let mut refresher = self.refresher.lock();
        if refresher.is_none() && !self.cancel.is_cancelled() {
            *refresher = Some(
                self.service
                    .spawn_refresher(self.config.refresh_interval(), self.cancel.child_token()),
            );
        }
    }

    /// Stop the refresher and wait for it to exit
    pub async fn stop(&self) -> Result<()> {
        self.cancel.cancel();
        let handle = self.refresher.lock().take();
        if let Some(handle) = handle {
            handle.await?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.refresher
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn SettingsApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// REST routes mounted on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering system settings REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
