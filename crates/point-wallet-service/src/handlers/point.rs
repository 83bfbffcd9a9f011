//! 积分 API 处理器
//!
//! 只负责提取请求参数、调用服务层并包装响应；
//! 业务失败由 `PointError` 的 `IntoResponse` 统一转换。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::dto::{AmountRequest, ApiResponse, PointHistoryResponse, UserPointResponse};
use crate::error::PointError;
use crate::state::AppState;

/// 查询用户余额
///
/// GET /point/{id}
pub async fn get_point(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserPointResponse>>, PointError> {
    let point = state.point_service.get_user_point(user_id).await?;
    Ok(Json(ApiResponse::success(point.into())))
}

/// 查询用户积分流水
///
/// GET /point/{id}/histories
pub async fn get_point_histories(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<PointHistoryResponse>>>, PointError> {
    let histories = state.point_service.get_user_point_histories(user_id).await?;

    Ok(Json(ApiResponse::success(
        histories.into_iter().map(Into::into).collect(),
    )))
}

/// 充值用户积分
///
/// PATCH /point/{id}/charge
pub async fn charge_point(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<ApiResponse<UserPointResponse>>, PointError> {
    let updated = state
        .point_service
        .charge_user_point(user_id, req.amount)
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}

/// 使用用户积分
///
/// PATCH /point/{id}/use
pub async fn use_point(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<ApiResponse<UserPointResponse>>, PointError> {
    let updated = state
        .point_service
        .use_user_point(user_id, req.amount)
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}
