use crate::db::postgres_service::PostgresService;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random secret for a bearer access token. Only its argon2 hash is stored.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Unguessable invitation token.
pub fn new_nanoid(len: usize) -> String {
    nanoid::nanoid!(len)
}

pub fn encrypt(token: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(token.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(token: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(token.as_bytes(), &parsed)
        .is_ok())
}

/// Bearer token handed to clients: base64("<user_id>.<secret>").
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user_id, secret) = decoded.split_once('.')?;
    Some((Uuid::parse_str(user_id).ok()?, secret.to_string()))
}

pub async fn token_valid(db: &PostgresService, token: &str) -> bool {
    let Some((user_id, secret)) = extract_token_parts(token) else {
        return false;
    };
    match db.get_user_auth_hash(user_id).await {
        Ok(hash) => verify(&secret, &hash).unwrap_or(false),
        Err(_) => false,
    }
}
