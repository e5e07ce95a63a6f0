//! SeaORM repository implementation

use crate::contract::SettingRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn find_by_name_on<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<SettingRecord>> {
    let result = entity::Entity::find_by_id(name.to_string()).one(conn).await?;
    Ok(result.map(Into::into))
}

async fn insert_on<C: ConnectionTrait>(conn: &C, record: &SettingRecord) -> Result<()> {
    let active = mapper::new_active_model(record, chrono::Utc::now());
    entity::Entity::insert(active)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

async fn update_on<C: ConnectionTrait>(conn: &C, record: &SettingRecord) -> Result<()> {
    let result = entity::Entity::update_many()
        .col_expr(entity::Column::Content, Expr::value(record.content.clone()))
        .col_expr(entity::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
        .filter(entity::Column::Name.eq(record.name.as_str()))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        anyhow::bail!("setting '{}' does not exist", record.name);
    }
    Ok(())
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_all(&self) -> Result<Vec<SettingRecord>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<SettingRecord>> {
        find_by_name_on(&*self.db, name).await
    }

    async fn insert(&self, record: &SettingRecord) -> Result<()> {
        insert_on(&*self.db, record).await
    }

    async fn update(&self, record: &SettingRecord) -> Result<()> {
        update_on(&*self.db, record).await
    }

    async fn upsert(&self, record: &SettingRecord) -> Result<()> {
        let txn = self.db.begin().await?;

        let written = match find_by_name_on(&txn, &record.name).await {
            Ok(Some(_)) => update_on(&txn, record).await,
            Ok(None) => insert_on(&txn, record).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(setting = %record.name, error = %rollback_err, "Rollback failed");
            }
            return Err(e);
        }

        txn.commit().await?;
        Ok(())
    }
}
