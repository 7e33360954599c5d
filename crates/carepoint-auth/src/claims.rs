//! JWT claim structures.

use carepoint_core::serde::deserialize_optional_lenient_i64;
use carepoint_models::{CenterId, Principal, UserId, UserType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// The role and center travel in the token so that authorization decisions
/// need no backend round-trip. Tokens minted by the backend may use
/// `user_type`/`center_id`, `userType`/`centerId`, or both at once; the
/// camelCase value wins when both are present and non-empty. Serialization
/// always writes snake_case.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `user_type`: Role name; unknown names normalize to an absent role
/// - `center_id`: Owning center, if any
/// - `supervisor_id`: Supervising user, if any
/// - `exp` / `iat`: Expiry and issued-at timestamps
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawClaims")]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub center_id: Option<i64>,
    pub supervisor_id: Option<i64>,
    pub exp: usize,
    pub iat: usize,
}

/// Wire form of [`Claims`] with each casing kept apart.
#[derive(Deserialize)]
struct RawClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, rename = "userType")]
    user_type_camel: Option<String>,
    #[serde(default, rename = "user_type")]
    user_type_snake: Option<String>,
    #[serde(
        default,
        rename = "centerId",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    center_id_camel: Option<i64>,
    #[serde(
        default,
        rename = "center_id",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    center_id_snake: Option<i64>,
    #[serde(
        default,
        rename = "supervisorId",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    supervisor_id_camel: Option<i64>,
    #[serde(
        default,
        rename = "supervisor_id",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    supervisor_id_snake: Option<i64>,
    exp: usize,
    iat: usize,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawClaims> for Claims {
    fn from(raw: RawClaims) -> Self {
        Self {
            sub: raw.sub,
            email: raw.email,
            user_type: non_empty(raw.user_type_camel).or(non_empty(raw.user_type_snake)),
            center_id: raw.center_id_camel.or(raw.center_id_snake),
            supervisor_id: raw.supervisor_id_camel.or(raw.supervisor_id_snake),
            exp: raw.exp,
            iat: raw.iat,
        }
    }
}

impl Claims {
    pub fn user_type(&self) -> Option<UserType> {
        self.user_type.as_deref().and_then(UserType::parse_lenient)
    }

    /// Normalizes the claims into the canonical principal.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub.parse::<UserId>().ok(),
            email: self.email.clone(),
            name: None,
            user_type: self.user_type(),
            center_id: self.center_id.map(CenterId::new),
            supervisor_id: self.supervisor_id.map(UserId::new),
        }
    }
}
