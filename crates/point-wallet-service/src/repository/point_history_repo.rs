//! 积分流水仓储
//!
//! 基于 DashMap 的进程内实现，按用户维护只追加的流水序列，
//! ID 由全局原子计数器单调分配。

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::traits::PointHistoryRepositoryTrait;
use crate::error::Result;
use crate::models::{PointHistory, TransactionType};

/// 积分流水仓储（进程内存储）
#[derive(Debug)]
pub struct PointHistoryRepository {
    entries: DashMap<i64, Vec<PointHistory>>,
    next_id: AtomicI64,
}

impl Default for PointHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PointHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 全部用户的流水总条数
    pub fn count(&self) -> usize {
        self.entries.iter().map(|e| e.value().len()).sum()
    }
}

#[async_trait]
impl PointHistoryRepositoryTrait for PointHistoryRepository {
    async fn insert(
        &self,
        user_id: i64,
        amount: i64,
        transaction_type: TransactionType,
        created_at: DateTime<Utc>,
    ) -> Result<PointHistory> {
        let history = PointHistory {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id,
            amount,
            transaction_type,
            created_at,
        };

        // 同一用户的追加由服务层的用户锁串行化，这里的 entry 锁
        // 只保护不同用户并发首次插入时的桶创建
        self.entries
            .entry(user_id)
            .or_default()
            .push(history.clone());

        Ok(history)
    }

    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<PointHistory>> {
        Ok(self
            .entries
            .get(&user_id)
            .map(|v| v.clone())
            .unwrap_or_default())
    }
}
