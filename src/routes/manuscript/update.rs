use crate::db::postgres_service::PostgresService;
use crate::types::manuscript::{ManuscriptRes, RManuscriptUpdate};
use crate::types::response::{ApiResponse, ApiResult};
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
    body: web::Json<RManuscriptUpdate>,
    auth: BearerAuth,
) -> ApiResult<ManuscriptRes> {
    let manuscript_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    let manuscript = db.get_manuscript(manuscript_id).await?;
    db.require_member(issuer, manuscript.team_id).await?;

    let manuscript = db.update_manuscript(manuscript_id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(manuscript.into()))
}
