use carepoint_config::{CorsConfig, JwtConfig};
use carepoint_observability::{PrometheusHandle, init_metrics};

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// `None` when observability is disabled; `/metrics` then answers 404.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            jwt_config,
            cors_config,
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics_handle = handle;
        self
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(JwtConfig::from_env(), CorsConfig::from_env()).with_metrics(init_metrics())
}
