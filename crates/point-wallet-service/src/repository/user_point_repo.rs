//! 用户积分仓储
//!
//! 基于 DashMap 的进程内实现，单节点部署时充当余额表。
//! 读取返回克隆，不跨 await 点持有分片锁。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::traits::UserPointRepositoryTrait;
use crate::error::Result;
use crate::models::UserPoint;

/// 用户积分仓储（进程内存储）
///
/// 每个用户一条余额记录，upsert 语义：不存在则创建，存在则整体覆盖。
#[derive(Debug, Default)]
pub struct UserPointRepository {
    data: DashMap<i64, UserPoint>,
}

impl UserPointRepository {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// 当前存储的余额记录数
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

#[async_trait]
impl UserPointRepositoryTrait for UserPointRepository {
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserPoint>> {
        Ok(self.data.get(&user_id).map(|v| v.clone()))
    }

    async fn insert_or_update(
        &self,
        user_id: i64,
        amount: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<UserPoint> {
        let record = UserPoint {
            user_id,
            point: amount,
            updated_at,
        };
        self.data.insert(user_id, record.clone());
        Ok(record)
    }
}
