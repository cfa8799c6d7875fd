use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, team::TeamRole};
use crate::utils::token;
use chrono::{DateTime, Utc};
use entity::invitation::{ActiveModel as InvitationActive, Model as InvitationModel};
use entity::membership::{Entity as Membership, Model as MembershipModel};
use entity::team::{ActiveModel as TeamActive, Entity as Team, Model as TeamModel};
use entity::user::Model as UserModel;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

pub const INVITE_TOKEN_LEN: usize = 21;

impl PostgresService {
    pub async fn team_exists_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        Ok(Team::find()
            .filter(entity::team::Column::Slug.eq(slug))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Create a team together with its bootstrap admin invitation; a team
    /// with no way in would be dead on arrival.
    pub async fn create_team(
        &self,
        name: String,
        slug: String,
        primary_color: String,
        admin_email: String,
        invite_expires_at: DateTime<Utc>,
    ) -> Result<(TeamModel, InvitationModel), AppError> {
        if self.team_exists_by_slug(&slug).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let team = TeamActive {
            id: Set(token::new_id()),
            name: Set(name),
            slug: Set(slug),
            primary_color: Set(primary_color),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let team = match team.insert(&txn).await {
            Ok(team) => team,
            Err(err) => {
                txn.rollback().await?;
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::AlreadyExists);
                }
                return Err(err.into());
            }
        };

        let invitation = InvitationActive {
            id: Set(token::new_id()),
            token: Set(token::new_nanoid(INVITE_TOKEN_LEN)),
            email: Set(admin_email),
            role: Set(TeamRole::Admin.as_str().to_string()),
            team_id: Set(team.id),
            invited_by: Set(None),
            expires_at: Set(invite_expires_at),
            accepted_at: Set(None),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((team, invitation))
    }

    pub async fn get_team(&self, id: Uuid) -> Result<TeamModel, AppError> {
        Ok(Team::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("Team not found".to_string()))?)
    }

    /// Deactivation blocks every pending invitation for the team without
    /// touching the invitation rows.
    pub async fn deactivate_team(&self, team_id: Uuid) -> Result<(), AppError> {
        let mut am: TeamActive = self.get_team(team_id).await?.into();
        am.is_active = Set(false);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn get_membership(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<MembershipModel>, AppError> {
        Ok(Membership::find_by_id((user_id, team_id))
            .one(&self.db)
            .await?)
    }

    /// Any membership row will do.
    pub async fn require_member(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<MembershipModel, AppError> {
        self.get_membership(user_id, team_id)
            .await?
            .ok_or(AppError::Forbidden)
    }

    pub async fn require_team_admin(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<MembershipModel, AppError> {
        let membership = self.require_member(user_id, team_id).await?;
        if membership.role != TeamRole::Admin.as_str() {
            return Err(AppError::Forbidden);
        }
        Ok(membership)
    }

    pub async fn list_members(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<(MembershipModel, UserModel)>, AppError> {
        let rows = Membership::find()
            .filter(entity::membership::Column::TeamId.eq(team_id))
            .find_also_related(entity::user::Entity)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| user.map(|user| (membership, user)))
            .collect())
    }
}
