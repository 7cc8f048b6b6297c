use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_management_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    routes::build_app,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let app = build_app(AppState::new(orm));

    let addr = config.socket_addr()?;
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
