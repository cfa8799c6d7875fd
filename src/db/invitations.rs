use crate::db::postgres_service::PostgresService;
use crate::db::teams::INVITE_TOKEN_LEN;
use crate::invite::validator::{classify, InviteStatus};
use crate::types::{error::AppError, team::TeamRole, user::DBUserCreate};
use crate::utils::token;
use chrono::{DateTime, Utc};
use entity::invitation::{ActiveModel as InvitationActive, Entity as Invitation, Model as InvitationModel};
use entity::membership::ActiveModel as MembershipActive;
use entity::team::Model as TeamModel;
use entity::user::ActiveModel as UserActive;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_invitation(
        &self,
        team_id: Uuid,
        email: String,
        role: TeamRole,
        invited_by: Option<Uuid>,
        expires_at: DateTime<Utc>,
    ) -> Result<InvitationModel, AppError> {
        // Validate related records so we can send domain errors instead of 500s
        self.get_team(team_id).await?;
        if let Some(inviter) = invited_by {
            self.get_user_by_id(&inviter).await?;
        }

        let invitation = InvitationActive {
            id: Set(token::new_id()),
            token: Set(token::new_nanoid(INVITE_TOKEN_LEN)),
            email: Set(email),
            role: Set(role.as_str().to_string()),
            team_id: Set(team_id),
            invited_by: Set(invited_by),
            expires_at: Set(expires_at),
            accepted_at: Set(None),
            created_at: Set(Utc::now()),
        };
        match invitation.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err) => {
                if let Some(sql_err) = err.sql_err() {
                    return match sql_err {
                        SqlErr::UniqueConstraintViolation(_) => Err(AppError::AlreadyExists),
                        SqlErr::ForeignKeyConstraintViolation(_) => {
                            Err(AppError::BadRequest("Related record missing".to_string()))
                        }
                        _ => Err(err.into()),
                    };
                }
                Err(err.into())
            }
        }
    }

    /// Lookup by token, joined with the owning team. `Ok(None)` means the
    /// token matches nothing; a dangling team reference is a data fault.
    pub async fn get_invitation_by_token(
        &self,
        invite_token: &str,
    ) -> Result<Option<(InvitationModel, TeamModel)>, AppError> {
        let found = Invitation::find()
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .find_also_related(entity::team::Entity)
            .one(&self.db)
            .await?;
        match found {
            Some((invitation, Some(team))) => Ok(Some((invitation, team))),
            Some((invitation, None)) => Err(AppError::Internal(format!(
                "invitation {} has no team",
                invitation.id
            ))),
            None => Ok(None),
        }
    }

    pub async fn list_pending_invitations(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<InvitationModel>, AppError> {
        Ok(Invitation::find()
            .filter(entity::invitation::Column::TeamId.eq(team_id))
            .filter(entity::invitation::Column::AcceptedAt.is_null())
            .filter(entity::invitation::Column::ExpiresAt.gt(Utc::now()))
            .all(&self.db)
            .await?)
    }

    /// Hard-delete a pending invitation. Accepted invitations stay for audit.
    pub async fn revoke_invitation(&self, team_id: Uuid, invite_token: &str) -> Result<(), AppError> {
        let res = Invitation::delete_many()
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .filter(entity::invitation::Column::TeamId.eq(team_id))
            .filter(entity::invitation::Column::AcceptedAt.is_null())
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Register a brand-new identity and accept the invitation, atomically.
    /// Either the user row, the acceptance, and the membership all land, or
    /// none of them do.
    pub async fn register_and_accept(
        &self,
        invite_token: &str,
        payload: DBUserCreate,
    ) -> Result<(Uuid, InvitationModel), AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let uid = token::new_id();
        let user = UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            pin_hash: Set(payload.pin_hash),
            auth_hash: Set(payload.auth_hash),
            color: Set(payload.color),
            role: Set("user".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        if let Err(err) = user.insert(&txn).await {
            txn.rollback().await?;
            if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::NameConflict);
            }
            return Err(err.into());
        }

        let invitation = match Self::accept_in_txn(&txn, invite_token, now).await {
            Ok(invitation) => invitation,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        if let Err(err) = Self::insert_membership_in_txn(&txn, uid, &invitation, now).await {
            txn.rollback().await?;
            return Err(err);
        }

        txn.commit().await?;
        Ok((uid, invitation))
    }

    /// Accept for an already-registered identity. The caller has verified the
    /// PIN; this only performs the acceptance + membership writes.
    pub async fn accept_with_existing(
        &self,
        invite_token: &str,
        user_id: Uuid,
    ) -> Result<InvitationModel, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let invitation = match Self::accept_in_txn(&txn, invite_token, now).await {
            Ok(invitation) => invitation,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        if let Err(err) = Self::insert_membership_in_txn(&txn, user_id, &invitation, now).await {
            txn.rollback().await?;
            return Err(err);
        }

        txn.commit().await?;
        Ok(invitation)
    }

    /// The conditional UPDATE is what makes acceptance first-writer-wins:
    /// it only matches a row that is still pending and unexpired, so a
    /// concurrent acceptor cannot set accepted_at twice. Zero rows affected
    /// means some precondition failed; the row is re-read in the same
    /// transaction to report which one.
    async fn accept_in_txn(
        txn: &DatabaseTransaction,
        invite_token: &str,
        now: DateTime<Utc>,
    ) -> Result<InvitationModel, AppError> {
        let lookup = Invitation::find()
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .find_also_related(entity::team::Entity)
            .one(txn)
            .await?;
        let status = classify(
            lookup
                .as_ref()
                .and_then(|(invitation, team)| team.as_ref().map(|team| (invitation, team))),
            now,
        );
        if status.is_terminal() {
            return Err(AppError::Invite(status));
        }

        let res = Invitation::update_many()
            .col_expr(entity::invitation::Column::AcceptedAt, Expr::value(now))
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .filter(entity::invitation::Column::AcceptedAt.is_null())
            .filter(entity::invitation::Column::ExpiresAt.gt(now))
            .exec(txn)
            .await?;
        if res.rows_affected == 0 {
            let lookup = Invitation::find()
                .filter(entity::invitation::Column::Token.eq(invite_token))
                .find_also_related(entity::team::Entity)
                .one(txn)
                .await?;
            let status = classify(
                lookup
                    .as_ref()
                    .and_then(|(invitation, team)| team.as_ref().map(|team| (invitation, team))),
                now,
            );
            let status = if status.is_terminal() {
                status
            } else {
                // The row reads as valid yet refused the update: a racing
                // acceptor committed between our read and write.
                InviteStatus::AlreadyAccepted
            };
            return Err(AppError::Invite(status));
        }

        Ok(Invitation::find()
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .one(txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?)
    }

    async fn insert_membership_in_txn(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        invitation: &InvitationModel,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let membership = MembershipActive {
            user_id: Set(user_id),
            team_id: Set(invitation.team_id),
            role: Set(invitation.role.clone()),
            created_at: Set(now),
        };
        if let Err(err) = membership.insert(txn).await {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::AlreadyExists);
            }
            return Err(err.into());
        }
        Ok(())
    }
}
