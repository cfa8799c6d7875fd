use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::issuer_id;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[get("/team/{id}")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Vec<entity::task::Model>> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_member(issuer, team_id).await?;

    Ok(ApiResponse::Ok(db.list_tasks_for_team(team_id).await?))
}
