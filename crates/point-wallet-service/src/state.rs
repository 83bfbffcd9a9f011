//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::repository::{PointHistoryRepository, UserPointRepository};
use crate::service::PointService;

/// 进程内存储组合下的积分服务类型
pub type WalletPointService = PointService<UserPointRepository, PointHistoryRepository>;

/// Axum 应用共享状态
///
/// 通过 Arc 在 handler 间共享同一个服务实例（及其锁注册表）
#[derive(Clone)]
pub struct AppState {
    pub point_service: Arc<WalletPointService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(point_service: Arc<WalletPointService>) -> Self {
        Self { point_service }
    }
}
