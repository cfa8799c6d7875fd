use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invitation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// Sole lookup key for the join flow; unique.
    pub token: String,
    pub email: String,
    /// Membership role granted on acceptance: "admin" or "member".
    pub role: String,
    pub team_id: Uuid,
    /// None for system-issued invitations (team bootstrap).
    pub invited_by: Option<Uuid>,
    pub expires_at: DateTimeUtc,
    /// Set exactly once; the invitation is terminal afterwards.
    pub accepted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to   = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
