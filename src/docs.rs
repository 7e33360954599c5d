use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use carepoint_authz::MenuTier;
use carepoint_models::{
    Center, CenterId, CenterScope, PermissionSet, Principal, UserId, UserRecord, UserType,
};

use crate::modules::centers::model::{VisibleCentersRequest, VisibleCentersResponse};
use crate::modules::permissions::model::{
    CheckCenterRequest, CheckPathRequest, CheckPathResponse, CheckPrincipalRequest,
    DecisionResponse, MeResponse,
};
use crate::modules::roles::model::{MenuResponse, RoleInfo, RolesResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_menu,
        crate::modules::permissions::controller::get_my_permissions,
        crate::modules::permissions::controller::check_path,
        crate::modules::permissions::controller::check_center,
        crate::modules::permissions::controller::check_principal,
        crate::modules::centers::controller::get_visible_centers,
    ),
    components(
        schemas(
            UserType,
            UserId,
            CenterId,
            Principal,
            UserRecord,
            Center,
            PermissionSet,
            CenterScope,
            MenuTier,
            RoleInfo,
            RolesResponse,
            MenuResponse,
            MeResponse,
            CheckPathRequest,
            CheckPathResponse,
            CheckCenterRequest,
            CheckPrincipalRequest,
            DecisionResponse,
            VisibleCentersRequest,
            VisibleCentersResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Roles", description = "Role hierarchy and menu tiers"),
        (name = "Permissions", description = "Access decisions for the signed-in user"),
        (name = "Centers", description = "Center-scoped visibility")
    ),
    info(
        title = "Carepoint API",
        version = "0.1.0",
        description = "Role-based access decisions for the Carepoint counseling dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
