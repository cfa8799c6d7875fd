use crate::db::postgres_service::PostgresService;
use crate::pipeline::STAGES;
use crate::types::manuscript::{BoardColumn, ManuscriptRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::issuer_id;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Kanban view: the team's manuscripts grouped by classified stage.
/// Every stage appears as a column, empty or not.
#[get("/board/{team_id}")]
pub async fn board(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Vec<BoardColumn>> {
    let team_id = path.into_inner();
    let issuer = issuer_id(&auth)?;

    db.require_member(issuer, team_id).await?;

    let manuscripts = db.list_manuscripts_for_team(team_id).await?;

    let mut columns: Vec<BoardColumn> = STAGES
        .iter()
        .map(|stage| BoardColumn {
            stage: *stage,
            manuscripts: Vec::new(),
        })
        .collect();
    for manuscript in manuscripts {
        let res: ManuscriptRes = manuscript.into();
        if let Some(column) = columns.iter_mut().find(|column| column.stage == res.stage) {
            column.manuscripts.push(res);
        }
    }

    Ok(ApiResponse::Ok(columns))
}
