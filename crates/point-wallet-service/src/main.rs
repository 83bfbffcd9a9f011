//! 积分钱包服务入口
//!
//! 提供余额查询、流水查询、充值与使用的 REST API。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use wallet_shared::{config::AppConfig, observability};

use point_wallet::lock::{LockConfig, LockRegistry};
use point_wallet::repository::{PointHistoryRepository, UserPointRepository};
use point_wallet::routes::app_router;
use point_wallet::service::PointService;
use point_wallet::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 统一加载配置：config/{env}.toml + WALLET_ 环境变量覆盖
    let config = AppConfig::load("point-wallet-service").unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    observability::init(&config.observability)?;

    info!("Starting point-wallet-service on {}", config.server_addr());
    info!(environment = %config.environment, "Configuration loaded");

    // 初始化存储协作方与用户锁注册表
    let user_point_repo = Arc::new(UserPointRepository::new());
    let point_history_repo = Arc::new(PointHistoryRepository::new());
    let lock_registry = Arc::new(LockRegistry::new(LockConfig {
        acquire_timeout: Duration::from_millis(config.lock.acquire_timeout_ms),
    }));
    info!("Repositories and lock registry initialized");

    // 组装服务与路由
    let point_service = Arc::new(PointService::new(
        user_point_repo,
        point_history_repo,
        lock_registry,
    ));
    let state = AppState::new(point_service);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("HTTP server listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service shutdown complete");
    Ok(())
}

/// 优雅关闭信号处理
///
/// 监听 Ctrl+C 和 SIGTERM 信号
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        }
    }
}
