//! Rank-based authorization for Axum.
//!
//! Two ways to guard, both built on the authority evaluator:
//! 1. Layer-based middleware (`require_admin`, or `require_minimum_rank` in a
//!    closure for other ranks) for whole routers
//! 2. `check_*` helpers for decisions that depend on request data
//!
//! Every helper records the decision in `authorization_checks_total`.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use carepoint_authz::{Authority, can_manage_principal};
use carepoint_core::AppError;
use carepoint_models::{CenterId, Principal, UserType};
use carepoint_observability::track_authorization_check;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Rejects the request unless the caller's role ranks at least `minimum`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/revenue", get(revenue_handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state: State<AppState>, req: Request, next: Next| {
///             require_minimum_rank(state, req, next, UserType::RegionalManager)
///         },
///     ));
/// ```
pub async fn require_minimum_rank(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    minimum: UserType,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_minimum_rank(&auth_user.principal(), minimum)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Staff and above.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_minimum_rank(State(state), req, next, UserType::Staff)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

pub fn check_minimum_rank(principal: &Principal, minimum: UserType) -> Result<(), AppError> {
    let allowed = principal.meets_minimum_rank(minimum);
    track_authorization_check("minimum_rank", allowed, principal.role_label());

    if !allowed {
        return Err(AppError::forbidden(format!(
            "Access denied. Minimum required role: {}",
            minimum.as_str()
        )));
    }

    Ok(())
}

/// Fails when any menu tier the path belongs to rejects the principal.
pub fn check_menu_path(principal: &Principal, path: &str) -> Result<(), AppError> {
    let allowed = principal.can_access_menu_path(path);
    track_authorization_check("menu_path", allowed, principal.role_label());

    if !allowed {
        return Err(AppError::forbidden(format!(
            "Access denied. {} is not available to your role.",
            path
        )));
    }

    Ok(())
}

/// # Example
///
/// ```rust,ignore
/// pub async fn handler(auth_user: AuthUser, Path(id): Path<i64>) -> Result<Json<Report>, AppError> {
///     check_center_access(&auth_user.principal(), Some(CenterId::new(id)))?;
///     // Handler logic
/// }
/// ```
pub fn check_center_access(
    principal: &Principal,
    target_center: Option<CenterId>,
) -> Result<(), AppError> {
    let allowed = principal.can_access_center(target_center);
    track_authorization_check("center_access", allowed, principal.role_label());

    if !allowed {
        return Err(AppError::forbidden(
            "Access denied. The center is outside your scope.".to_string(),
        ));
    }

    Ok(())
}

pub fn check_manage_principal(actor: &Principal, target: &Principal) -> Result<(), AppError> {
    let allowed = can_manage_principal(
        actor.user_type,
        actor.center_id,
        target.user_type,
        target.center_id,
    );
    track_authorization_check("manage_principal", allowed, actor.role_label());

    if !allowed {
        return Err(AppError::forbidden(
            "Access denied. You cannot manage this user.".to_string(),
        ));
    }

    Ok(())
}
