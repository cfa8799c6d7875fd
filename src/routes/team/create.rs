use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamCreate, TeamCreateRes};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Duration, Utc};
use std::sync::Arc;

const DEFAULT_COLOR: &str = "#2563eb";
const BOOTSTRAP_INVITE_DAYS: i64 = 7;

fn slug_is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[post("")]
pub async fn create_team(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RTeamCreate>,
    _auth: BearerAuth,
) -> ApiResult<TeamCreateRes> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Team name must not be empty".into()));
    }
    if !slug_is_valid(&data.slug) {
        return Err(AppError::Validation(
            "Slug must be lowercase letters, digits and dashes".into(),
        ));
    }
    if data.admin_email.trim().is_empty() {
        return Err(AppError::Validation("Admin email must not be empty".into()));
    }

    let color = data
        .primary_color
        .clone()
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());

    let (team, invitation) = db
        .create_team(
            name.to_string(),
            data.slug.clone(),
            color,
            data.admin_email.trim().to_string(),
            Utc::now() + Duration::days(BOOTSTRAP_INVITE_DAYS),
        )
        .await?;

    Ok(ApiResponse::Created(TeamCreateRes {
        id: team.id,
        slug: team.slug,
        invite_token: invitation.token,
        message: format!("Team {} has been successfully created.", team.name),
    }))
}
