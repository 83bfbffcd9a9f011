//! 积分服务
//!
//! 处理积分变更与查询的核心业务逻辑，包括：
//! - 单次充值上限校验（访问存储之前拒绝）
//! - 按用户取锁，串行化同一用户的并发变更
//! - 通过领域模型的纯转移函数校验并计算新余额
//! - 追加流水 + 写入余额（共用同一变更时刻）
//! - 余额写入失败时暴露流水/余额不一致，而不是静默吞掉
//!
//! ## 变更流程
//!
//! 1. 单次上限校验 -> 2. 获取用户锁 -> 3. 读取当前余额（不存在则视为 0）
//!    -> 4. 计算新余额（校验失败直接返回，锁随守卫释放）
//!    -> 5. 追加流水 -> 6. 写入余额 -> 7. 释放锁并返回

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::error::{PointError, Result};
use crate::lock::LockRegistry;
use crate::models::{PointHistory, TransactionType, UserPoint};
use crate::repository::{PointHistoryRepositoryTrait, UserPointRepositoryTrait};

/// 单次充值上限，独立于余额上限的业务政策
pub const MAX_CHARGE_PER_REQUEST: i64 = 10_000;

/// 积分服务
///
/// 余额与流水是同一用户下唯一的共享可变状态，只允许在持有该用户锁的
/// 临界区内变更。读操作不取锁，看到的是最近一次完成的写入。
pub struct PointService<UP, PH>
where
    UP: UserPointRepositoryTrait,
    PH: PointHistoryRepositoryTrait,
{
    user_point_repo: Arc<UP>,
    point_history_repo: Arc<PH>,
    lock_registry: Arc<LockRegistry>,
}

impl<UP, PH> PointService<UP, PH>
where
    UP: UserPointRepositoryTrait,
    PH: PointHistoryRepositoryTrait,
{
    pub fn new(
        user_point_repo: Arc<UP>,
        point_history_repo: Arc<PH>,
        lock_registry: Arc<LockRegistry>,
    ) -> Self {
        Self {
            user_point_repo,
            point_history_repo,
            lock_registry,
        }
    }

    /// 查询用户余额
    ///
    /// 纯读操作，不取锁；记录不存在时返回 `UserPointNotFound`，
    /// 读路径不会隐式创建余额记录。
    #[instrument(skip(self))]
    pub async fn get_user_point(&self, user_id: i64) -> Result<UserPoint> {
        self.user_point_repo
            .find_by_id(user_id)
            .await?
            .ok_or(PointError::UserPointNotFound(user_id))
    }

    /// 查询用户积分流水
    ///
    /// 按插入顺序返回全部流水；没有任何记录时返回 `PointHistoryNotFound`。
    #[instrument(skip(self))]
    pub async fn get_user_point_histories(&self, user_id: i64) -> Result<Vec<PointHistory>> {
        let histories = self.point_history_repo.find_all_by_user(user_id).await?;

        if histories.is_empty() {
            return Err(PointError::PointHistoryNotFound(user_id));
        }

        Ok(histories)
    }

    /// 充值用户积分
    ///
    /// 单次上限在取锁与访问存储之前校验；余额记录不存在时从 0 开始。
    #[instrument(skip(self))]
    pub async fn charge_user_point(&self, user_id: i64, amount: i64) -> Result<UserPoint> {
        if amount > MAX_CHARGE_PER_REQUEST {
            return Err(PointError::PolicyViolation {
                amount,
                limit: MAX_CHARGE_PER_REQUEST,
            });
        }

        let _guard = self.lock_registry.acquire(user_id).await?;

        let current = self
            .user_point_repo
            .find_by_id(user_id)
            .await?
            .unwrap_or_else(|| UserPoint::empty(user_id));

        let new_point = current.compute_charge(amount)?;

        self.apply_mutation(user_id, amount, TransactionType::Charge, new_point)
            .await
    }

    /// 使用用户积分
    ///
    /// 使用金额不受粒度限制，但不能超过当前余额。
    #[instrument(skip(self))]
    pub async fn use_user_point(&self, user_id: i64, amount: i64) -> Result<UserPoint> {
        let _guard = self.lock_registry.acquire(user_id).await?;

        let current = self
            .user_point_repo
            .find_by_id(user_id)
            .await?
            .unwrap_or_else(|| UserPoint::empty(user_id));

        let new_point = current.compute_use(amount)?;

        self.apply_mutation(user_id, amount, TransactionType::Use, new_point)
            .await
    }

    /// 落盘一次已通过校验的变更：先追加流水，再写余额
    ///
    /// 调用方必须持有该用户的锁。两次写入共用同一时间戳，
    /// 构成同一逻辑变更时刻。流水已写入而余额写入失败时返回
    /// `PartialFailure`，交由调用方/运维对账，不自动重试。
    async fn apply_mutation(
        &self,
        user_id: i64,
        amount: i64,
        transaction_type: TransactionType,
        new_point: i64,
    ) -> Result<UserPoint> {
        let now = Utc::now();

        let history = self
            .point_history_repo
            .insert(user_id, amount, transaction_type, now)
            .await?;

        match self
            .user_point_repo
            .insert_or_update(user_id, new_point, now)
            .await
        {
            Ok(updated) => {
                info!(
                    user_id = user_id,
                    amount = amount,
                    new_point = updated.point,
                    transaction_type = ?transaction_type,
                    "积分变更完成"
                );
                Ok(updated)
            }
            Err(e) => {
                warn!(
                    user_id = user_id,
                    history_id = history.id,
                    error = %e,
                    "余额写入失败，流水与余额出现分叉"
                );
                Err(PointError::PartialFailure {
                    user_id,
                    history_id: history.id,
                })
            }
        }
    }
}
