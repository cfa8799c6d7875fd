use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::issuer_id;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Deactivation kills every pending join link for the team at once.
#[post("/{id}/deactivate")]
pub async fn deactivate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_team_admin(issuer, team_id).await?;
    db.deactivate_team(team_id).await?;

    warn!("Team {} deactivated by {}", team_id, issuer);

    Ok(ApiResponse::Ok(Response {
        message: "Team has been deactivated.".to_string(),
    }))
}
