use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::MemberListItem;
use crate::utils::webutils::issuer_id;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{id}/members")]
pub async fn members(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Vec<MemberListItem>> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_member(issuer, team_id).await?;

    let rows = db.list_members(team_id).await?;
    Ok(ApiResponse::Ok(
        rows.into_iter()
            .map(|(membership, user)| MemberListItem {
                user_id: user.id,
                name: user.name,
                color: user.color,
                role: membership.role,
                joined_at: membership.created_at,
            })
            .collect(),
    ))
}
