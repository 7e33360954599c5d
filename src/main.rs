use carepoint::router::init_router;
use carepoint::state::init_app_state;
use carepoint_config::ServerConfig;
use carepoint_observability::init_tracing;
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    if state.jwt_config.uses_development_secret() {
        warn!("JWT_SECRET is unset; tokens are signed with the development secret");
    }
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(%address, "Server listening");
    println!("🚀 Server running on http://{}", address);
    println!("📚 Swagger UI available at http://{}/swagger-ui", address);
    println!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
