use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Tagged credential string, `argon2:<phc>` or legacy `sha256:<hex>`.
    pub pin_hash: String,
    /// Argon2 hash of the bearer-token secret.
    pub auth_hash: String,
    pub color: String,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        super::membership::Relation::User.def().rev()
    }
}

impl ActiveModelBehavior for ActiveModel {}
