//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Json, Router,
    routing::{get, patch},
};
use serde_json::json;

use crate::{handlers, state::AppState};

/// 构建积分相关的路由
pub fn point_routes() -> Router<AppState> {
    Router::new()
        .route("/point/{id}", get(handlers::point::get_point))
        .route(
            "/point/{id}/histories",
            get(handlers::point::get_point_histories),
        )
        .route("/point/{id}/charge", patch(handlers::point::charge_point))
        .route("/point/{id}/use", patch(handlers::point::use_point))
}

/// 组装完整的应用路由（含健康检查）
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(point_routes())
        .with_state(state)
}

/// 健康检查端点
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
