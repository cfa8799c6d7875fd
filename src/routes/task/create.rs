use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::RTaskCreate;
use crate::utils::webutils::issuer_id;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RTaskCreate>,
    auth: BearerAuth,
) -> ApiResult<entity::task::Model> {
    let issuer = issuer_id(&auth)?;
    db.require_member(issuer, body.team_id).await?;

    if body.title.trim().is_empty() {
        return Err(AppError::Validation("Task title must not be empty".into()));
    }

    // An assignee outside the team would be invisible on every board.
    if let Some(assignee) = body.assignee {
        db.require_member(assignee, body.team_id)
            .await
            .map_err(|_| AppError::BadRequest("Assignee is not a team member".into()))?;
    }

    let task = db.create_task(body.into_inner()).await?;
    Ok(ApiResponse::Created(task))
}
