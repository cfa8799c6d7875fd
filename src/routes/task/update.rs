use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::RTaskUpdate;
use crate::utils::webutils::issuer_id;
use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[patch("/{id}")]
pub async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RTaskUpdate>,
    auth: BearerAuth,
) -> ApiResult<entity::task::Model> {
    let task_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    let task = db.get_task(task_id).await?;
    db.require_member(issuer, task.team_id).await?;

    let task = db.update_task(task_id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(task))
}
