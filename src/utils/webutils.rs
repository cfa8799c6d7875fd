use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, token_valid};
use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Identity behind a bearer header; the middleware has already checked the
/// secret, this only recovers the user id.
pub fn issuer_id(auth: &BearerAuth) -> Result<Uuid, AppError> {
    match extract_token_parts(auth.token()) {
        Some((user_id, _)) => Ok(user_id),
        None => Err(AppError::Unauthorized),
    }
}

pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<Arc<PostgresService>>>() else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };
    let db = db.get_ref().as_ref();
    if token_valid(db, credentials.token()).await {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
