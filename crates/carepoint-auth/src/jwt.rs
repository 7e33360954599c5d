//! JWT creation and verification.

use carepoint_config::JwtConfig;
use carepoint_core::AppError;
use carepoint_models::Principal;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::Claims;

/// Creates an access token carrying the principal's role and center.
///
/// Principals without an id get `"0"` as subject.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(principal: &Principal, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: principal.id.map_or(0, |id| id.get()).to_string(),
        email: principal.email.clone(),
        user_type: principal.user_type.map(|role| role.as_str().to_string()),
        center_id: principal.center_id.map(|id| id.get()),
        supervisor_id: principal.supervisor_id.map(|id| id.get()),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
