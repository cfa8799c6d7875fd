use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{InviteListItem, RTeamInvite, TeamInviteRes};
use crate::utils::webutils::issuer_id;
use actix_web::{delete, get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const INVITE_EXPIRY_DAYS: i64 = 7;

#[post("/{id}/invite")]
pub async fn create_invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTeamInvite>,
    auth: BearerAuth,
) -> ApiResult<TeamInviteRes> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_team_admin(issuer, team_id).await?;

    let team = db.get_team(team_id).await?;
    if !team.is_active {
        return Err(AppError::Conflict("Team is deactivated".into()));
    }

    let email = data.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Invitee email must not be empty".into()));
    }

    let invitation = db
        .create_invitation(
            team_id,
            email.to_string(),
            data.role,
            Some(issuer),
            Utc::now() + Duration::days(INVITE_EXPIRY_DAYS),
        )
        .await?;

    info!("Invitation for {} to team {} created", email, team.slug);

    Ok(ApiResponse::Created(TeamInviteRes {
        token: invitation.token,
        expires_at: invitation.expires_at,
        message: "Invitation created.".to_string(),
    }))
}

#[get("/{id}/invites")]
pub async fn list_invites(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Vec<InviteListItem>> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_member(issuer, team_id).await?;

    let invitations = db.list_pending_invitations(team_id).await?;
    Ok(ApiResponse::Ok(
        invitations
            .into_iter()
            .map(|invitation| InviteListItem {
                token: invitation.token,
                email: invitation.email,
                role: invitation.role,
                expires_at: invitation.expires_at,
                created_at: invitation.created_at,
            })
            .collect(),
    ))
}

#[delete("/{id}/invite/{token}")]
pub async fn revoke_invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, String)>,
    auth: BearerAuth,
) -> ApiResult<()> {
    let (team_id, invite_token) = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_team_admin(issuer, team_id).await?;
    db.revoke_invitation(team_id, &invite_token).await?;

    Ok(ApiResponse::NoContent)
}
