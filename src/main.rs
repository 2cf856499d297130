//! Server binary: configuration, pool, migrations, serve.

use pizzeria_api::{app_router, apply_migrations, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("pizzeria_api=info,tower_http=info")
                }),
        )
        .init();

    let config = Config::from_env();
    let pool = pizzeria_api::connect(&config.database_url).await?;
    apply_migrations(&pool).await?;
    let state = AppState { pool };

    let app = app_router(state);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
