use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::manuscript::{ManuscriptRes, RManuscriptCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::issuer_id;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RManuscriptCreate>,
    auth: BearerAuth,
) -> ApiResult<ManuscriptRes> {
    let issuer = issuer_id(&auth)?;
    db.require_member(issuer, body.team_id).await?;

    if body.title.trim().is_empty() {
        return Err(AppError::Validation("Manuscript title must not be empty".into()));
    }
    if body.author_name.trim().is_empty() {
        return Err(AppError::Validation("Author name must not be empty".into()));
    }

    let manuscript = db.create_manuscript(body.into_inner()).await?;
    Ok(ApiResponse::Created(manuscript.into()))
}
