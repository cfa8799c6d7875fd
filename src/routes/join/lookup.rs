use crate::db::postgres_service::PostgresService;
use crate::invite::flow::{self, JoinState};
use crate::invite::validator::classify;
use crate::types::invitation::{JoinInvitationInfo, JoinLookupRes, JoinTeamInfo};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use chrono::Utc;
use std::sync::Arc;

/// Opening a join link. The classification here is advisory: the accept
/// endpoints re-check inside their transaction.
#[get("/{token}")]
pub async fn lookup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<JoinLookupRes> {
    let invite_token = path.into_inner();

    let found = db.get_invitation_by_token(&invite_token).await?;
    let status = classify(
        found.as_ref().map(|(invitation, team)| (invitation, team)),
        Utc::now(),
    );
    let state = flow::resolve(status);

    let res = match (state, found) {
        (JoinState::Account, Some((invitation, team))) => JoinLookupRes {
            state,
            reason: None,
            invitation: Some(JoinInvitationInfo {
                email: invitation.email,
                role: invitation.role,
                team: JoinTeamInfo {
                    name: team.name,
                    slug: team.slug,
                    primary_color: team.primary_color,
                },
            }),
        },
        _ => JoinLookupRes {
            state,
            reason: Some(status),
            invitation: None,
        },
    };

    Ok(ApiResponse::Ok(res))
}
