//! Principals, centers, and the ingress normalization of raw user records.
//!
//! The backend is inconsistent about field casing (`userType` vs `user_type`,
//! `centerId` vs `center_id`) and about the JSON type of ids. [`UserRecord`]
//! absorbs those differences and [`UserRecord::into_principal`] produces the
//! single canonical [`Principal`] every other component works with.

use crate::ids::{CenterId, UserId};
use crate::roles::UserType;
use carepoint_core::serde::deserialize_optional_lenient_i64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A normalized reference to a user, as seen by the authority evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub name: Option<String>,
    /// `None` when the role is missing or unrecognised.
    pub user_type: Option<UserType>,
    pub center_id: Option<CenterId>,
    pub supervisor_id: Option<UserId>,
}

impl Principal {
    pub fn new(user_type: Option<UserType>, center_id: Option<CenterId>) -> Self {
        Self {
            user_type,
            center_id,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_supervisor(mut self, supervisor_id: UserId) -> Self {
        self.supervisor_id = Some(supervisor_id);
        self
    }
}

/// Raw user object as delivered by the backend.
///
/// Both casings are accepted; when both are present and non-empty the
/// camelCase field wins.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "userType")]
    pub user_type_camel: Option<String>,
    #[serde(default, rename = "user_type")]
    pub user_type_snake: Option<String>,
    #[serde(
        default,
        rename = "centerId",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    pub center_id_camel: Option<i64>,
    #[serde(
        default,
        rename = "center_id",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    pub center_id_snake: Option<i64>,
    #[serde(
        default,
        rename = "supervisorId",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    pub supervisor_id_camel: Option<i64>,
    #[serde(
        default,
        rename = "supervisor_id",
        deserialize_with = "deserialize_optional_lenient_i64"
    )]
    pub supervisor_id_snake: Option<i64>,
}

impl UserRecord {
    /// The role string the record carries, whichever casing it used.
    pub fn raw_user_type(&self) -> Option<&str> {
        non_empty(self.user_type_camel.as_deref()).or(non_empty(self.user_type_snake.as_deref()))
    }

    pub fn into_principal(self) -> Principal {
        let user_type = self.raw_user_type().and_then(UserType::parse_lenient);

        Principal {
            id: self.id.map(UserId::new),
            email: self.email,
            name: self.name,
            user_type,
            center_id: self
                .center_id_camel
                .or(self.center_id_snake)
                .map(CenterId::new),
            supervisor_id: self
                .supervisor_id_camel
                .or(self.supervisor_id_snake)
                .map(UserId::new),
        }
    }
}

impl From<UserRecord> for Principal {
    fn from(record: UserRecord) -> Self {
        record.into_principal()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A counseling center. Only relevant here as the target of center-scoped checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Center {
    pub id: CenterId,
    pub name: String,
    #[serde(default, alias = "managerId")]
    pub manager_id: Option<UserId>,
    #[serde(default)]
    pub region: Option<String>,
}
