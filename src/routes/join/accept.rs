use crate::db::postgres_service::PostgresService;
use crate::invite::flow::{JoinEvent, JoinState};
use crate::invite::validator::classify;
use crate::types::error::AppError;
use crate::types::invitation::{JoinCompleteRes, RJoinLogin, RJoinRegister};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::DBUserCreate;
use crate::utils::{credential, token};
use actix_web::{post, web};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

fn completed(from: JoinState) -> JoinState {
    match from.apply(JoinEvent::Accepted) {
        Ok(state) => state,
        Err(_) => JoinState::Complete,
    }
}

/// New-identity path. Local validation failures never reach the database.
#[post("/{token}/register")]
pub async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RJoinRegister>,
) -> ApiResult<JoinCompleteRes> {
    let invite_token = path.into_inner();

    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Display name must not be empty".into()));
    }
    if !credential::pin_is_valid(&body.pin) {
        return Err(AppError::Validation("PIN must be exactly 4 digits".into()));
    }
    if body.pin != body.pin_confirm {
        return Err(AppError::Validation("PIN and confirmation do not match".into()));
    }

    // A taken name means this person already has an account; push them to
    // the existing-identity path instead of failing outright.
    if db.user_exists_by_name(name).await? {
        return Err(AppError::NameConflict);
    }

    let found = db.get_invitation_by_token(&invite_token).await?;
    let status = classify(
        found.as_ref().map(|(invitation, team)| (invitation, team)),
        Utc::now(),
    );
    let (invitation, team) = match found {
        Some(pair) if !status.is_terminal() => pair,
        _ => return Err(AppError::Invite(status)),
    };

    let pin_hash =
        credential::hash_pin(&body.pin).map_err(|e| AppError::Internal(e.to_string()))?;
    let secret = token::new_token();
    let auth_hash =
        token::encrypt(&secret).map_err(|e| AppError::Internal(e.to_string()))?;

    let (user_id, _) = db
        .register_and_accept(
            &invite_token,
            DBUserCreate {
                name: name.to_string(),
                email: Some(invitation.email.clone()),
                pin_hash,
                auth_hash,
                color: team.primary_color.clone(),
            },
        )
        .await?;

    info!("New user {} joined team {}", user_id, team.slug);

    Ok(ApiResponse::Created(JoinCompleteRes {
        state: completed(JoinState::Account),
        user_id,
        access_token: token::construct_token(&user_id, &secret),
        message: format!("Welcome to {}!", team.name),
    }))
}

/// Existing-identity path. Name and PIN failures are indistinguishable on
/// purpose: the response must not reveal which display names exist.
#[post("/{token}/login")]
pub async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RJoinLogin>,
) -> ApiResult<JoinCompleteRes> {
    let invite_token = path.into_inner();

    let name = body.name.trim();
    if name.is_empty() || body.pin.is_empty() {
        return Err(AppError::Validation("Name and PIN are required".into()));
    }

    let user = match db.get_user_by_name(name).await {
        Ok(user) => user,
        Err(_) => return Err(AppError::InvalidCredentials),
    };
    match credential::verify_pin(&body.pin, &user.pin_hash) {
        Ok(true) => {}
        Ok(false) | Err(_) => return Err(AppError::InvalidCredentials),
    }

    let invitation = db.accept_with_existing(&invite_token, user.id).await?;
    let team = db.get_team(invitation.team_id).await?;

    let secret = db.regenerate_user_token(&user.id).await?;

    info!("User {} joined team {}", user.id, team.slug);

    Ok(ApiResponse::Ok(JoinCompleteRes {
        state: completed(JoinState::ExistingUser),
        user_id: user.id,
        access_token: token::construct_token(&user.id, &secret),
        message: format!("Welcome to {}!", team.name),
    }))
}
