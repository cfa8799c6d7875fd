use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::issuer_id;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[delete("/{id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<()> {
    let task_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    let task = db.get_task(task_id).await?;
    db.require_member(issuer, task.team_id).await?;

    db.delete_task(task_id).await?;
    Ok(ApiResponse::NoContent)
}
