//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// System config table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "system_config")]
pub struct Model {
    /// Setting name (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    /// Setting content
    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
