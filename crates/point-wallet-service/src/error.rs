//! 钱包服务错误类型
//!
//! 定义积分操作的业务错误和系统错误。每个错误携带稳定的错误码，
//! 调用方按错误种类分支处理，而不是解析错误文案。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// 钱包服务错误类型
#[derive(Debug, Error)]
pub enum PointError {
    // === 金额校验错误 ===
    #[error("交易金额无效: {amount}（{constraint}）")]
    InvalidAmount { amount: i64, constraint: &'static str },

    #[error("单次充值不能超过 {limit}: 请求金额 {amount}")]
    PolicyViolation { amount: i64, limit: i64 },

    #[error("余额不能超过上限 {max}: 当前 {current}, 充值 {amount}")]
    LimitExceeded { current: i64, amount: i64, max: i64 },

    #[error("余额不足: 当前 {current}, 使用 {amount}")]
    InsufficientBalance { current: i64, amount: i64 },

    // === 查询错误 ===
    #[error("用户积分不存在: user_id={0}")]
    UserPointNotFound(i64),

    #[error("用户无积分变动记录: user_id={0}")]
    PointHistoryNotFound(i64),

    // === 系统错误 ===
    #[error("流水已记录但余额写入失败: user_id={user_id}, history_id={history_id}")]
    PartialFailure { user_id: i64, history_id: i64 },

    #[error("获取用户锁超时: user_id={user_id}")]
    LockTimeout { user_id: i64 },

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 钱包服务 Result 类型别名
pub type Result<T> = std::result::Result<T, PointError>;

impl PointError {
    /// 检查是否为可重试的错误
    ///
    /// 业务校验失败是确定性的拒绝，重试没有意义；
    /// PartialFailure 需要人工对账，不允许自动重试。
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockTimeout { .. })
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        !matches!(
            self,
            Self::PartialFailure { .. } | Self::LockTimeout { .. } | Self::Internal(_)
        )
    }

    /// 获取错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::PolicyViolation { .. } => "POLICY_VIOLATION",
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::UserPointNotFound(_) => "USER_POINT_NOT_FOUND",
            Self::PointHistoryNotFound(_) => "POINT_HISTORY_NOT_FOUND",
            Self::PartialFailure { .. } => "PARTIAL_FAILURE",
            Self::LockTimeout { .. } => "LOCK_TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAmount { .. } | Self::PolicyViolation { .. } => StatusCode::BAD_REQUEST,

            Self::LimitExceeded { .. } | Self::InsufficientBalance { .. } => StatusCode::CONFLICT,

            Self::UserPointNotFound(_) | Self::PointHistoryNotFound(_) => StatusCode::NOT_FOUND,

            Self::LockTimeout { .. } => StatusCode::SERVICE_UNAVAILABLE,

            Self::PartialFailure { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PointError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::PartialFailure {
                user_id,
                history_id,
            } => {
                tracing::error!(
                    user_id = *user_id,
                    history_id = *history_id,
                    "流水与余额写入不一致，需要对账"
                );
                "服务内部错误，请联系管理员".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
