//! Carepoint Observability
//!
//! - Console, rolling-file and JSON logging via `tracing`
//! - Per-request logging middleware
//! - Prometheus metrics and authorization-decision counters
//!
//! Observability is on by default and can be switched off at runtime with
//! `OBSERVABILITY_ENABLED=false`, in which case only console logging is
//! installed and metric helpers become no-ops.
//!
//! # Examples
//!
//! ```no_run
//! use carepoint_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod basic_logging;
pub mod logging;
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, is_observability_enabled, metrics_middleware,
    track_authorization_check, track_jwt_validation,
};
