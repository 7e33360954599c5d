use carepoint_models::{Center, CenterScope};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VisibleCentersRequest {
    /// Candidate centers, typically the backend's full center list.
    #[validate(length(max = 10000, message = "Too many centers in one request"))]
    pub centers: Vec<Center>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VisibleCentersResponse {
    /// Input order is preserved.
    pub centers: Vec<Center>,
    pub scope: CenterScope,
}
