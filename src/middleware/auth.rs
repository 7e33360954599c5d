use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use carepoint_auth::{Claims, verify_token};
use carepoint_authz::role_label;
use carepoint_core::AppError;
use carepoint_models::{CenterId, Principal, UserType};
use carepoint_observability::track_jwt_validation;

use crate::state::AppState;

/// Extractor that validates the bearer token and exposes its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The canonical principal the evaluator works with.
    pub fn principal(&self) -> Principal {
        self.0.principal()
    }

    /// `None` when the token carries no role or an unknown one.
    pub fn role(&self) -> Option<UserType> {
        self.0.user_type()
    }

    pub fn center_id(&self) -> Option<CenterId> {
        self.0.center_id.map(CenterId::new)
    }

    /// Role name for logs and metric labels.
    pub fn role_label(&self) -> &'static str {
        role_label(self.role())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config);
        track_jwt_validation(claims.is_ok());

        Ok(AuthUser(claims?))
    }
}
