//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{PointHistory, TransactionType, UserPoint};

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 用户余额响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPointResponse {
    pub user_id: i64,
    pub point: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<UserPoint> for UserPointResponse {
    fn from(point: UserPoint) -> Self {
        Self {
            user_id: point.user_id,
            point: point.point,
            updated_at: point.updated_at,
        }
    }
}

/// 积分流水响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryResponse {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>,
}

impl From<PointHistory> for PointHistoryResponse {
    fn from(history: PointHistory) -> Self {
        Self {
            id: history.id,
            user_id: history.user_id,
            amount: history.amount,
            transaction_type: history.transaction_type,
            created_at: history.created_at,
        }
    }
}
