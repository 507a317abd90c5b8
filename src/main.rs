use order_pricing::{api, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式, RUST_LOG 控制级别
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 启动时加载一次税率表
    let state = AppState::from_config(&config).await?;
    info!(
        "Tax table loaded from {:?}: {} countries",
        config.taxes.path,
        state.taxes.current().await.len()
    );

    let app = api::router(state);

    // 启动服务器
    let addr = config.addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  ANY  /ping          - health check");
    info!("  ANY  /feedback      - log feedback message");
    info!("  ANY  /order         - price an order");
    info!("  GET  /taxes         - export tax table (CSV)");
    info!("  POST /taxes/reload  - reload tax table from file");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Stopping server...");
}
