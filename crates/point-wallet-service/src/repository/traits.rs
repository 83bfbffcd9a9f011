//! 仓储 Trait 定义
//!
//! 定义存储协作方的接口，便于服务层依赖抽象而非具体实现，支持 mock 测试。
//! 持久化的耐久性、索引与磁盘格式均由实现方负责，不属于本服务的关注点。

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{PointHistory, TransactionType, UserPoint};

/// 用户积分仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPointRepositoryTrait: Send + Sync {
    /// 查询用户余额，记录不存在时返回 None
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserPoint>>;

    /// 写入用户余额（upsert），返回带有传入时间戳的持久化记录
    ///
    /// 同一次变更的流水与余额共用一个时间戳，由调用方传入
    async fn insert_or_update(
        &self,
        user_id: i64,
        amount: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<UserPoint>;
}

/// 积分流水仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointHistoryRepositoryTrait: Send + Sync {
    /// 追加一条流水记录，ID 由存储层单调分配
    async fn insert(
        &self,
        user_id: i64,
        amount: i64,
        transaction_type: TransactionType,
        created_at: DateTime<Utc>,
    ) -> Result<PointHistory>;

    /// 查询用户全部流水，按插入顺序返回
    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<PointHistory>>;
}
