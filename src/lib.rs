//! # Carepoint API
//!
//! Access-control service for the Carepoint counseling dashboard. Pages and
//! components of the dashboard are gated by a six-tier role hierarchy; this
//! server answers the questions those gates ask.
//!
//! ## Role Hierarchy
//!
//! | Rank | Role | Admin | Center scope |
//! |------|------|-------|--------------|
//! | 5 | `super_admin` | yes | every center |
//! | 4 | `regional_manager` | yes | every center |
//! | 3 | `center_manager` | yes | own center |
//! | 2 | `staff` | yes | own center |
//! | 1 | `expert` | no | none |
//! | 0 | `general` | no | none |
//!
//! A missing or unrecognised role counts as rank 0 and fails every check.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor and rank guards
//! ├── modules/          # Feature modules
//! │   ├── roles/        # Role table and menu tiers
//! │   ├── permissions/  # Per-caller decisions
//! │   └── centers/      # Center visibility
//! ├── docs.rs           # OpenAPI document
//! ├── metrics.rs        # Prometheus endpoint
//! ├── router.rs         # Main router
//! ├── state.rs          # Shared state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module has `controller.rs` (handlers), `service.rs`
//! (evaluation and logging), `model.rs` (DTOs) and `router.rs`.
//!
//! ## Authentication
//!
//! Requests carry `Authorization: Bearer <jwt>`. The token's `user_type` and
//! `center_id` claims (or their camelCase forms) are normalized into a
//! [`Principal`](carepoint_models::Principal) before any decision is made.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! APP_HOST=0.0.0.0
//! APP_PORT=3000
//! OBSERVABILITY_ENABLED=true
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use carepoint_auth;
pub use carepoint_authz;
pub use carepoint_config;
pub use carepoint_core;
pub use carepoint_models;
