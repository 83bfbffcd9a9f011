//! 用户锁注册表
//!
//! 进程内按用户 ID 互斥：同一用户的余额变更在任一时刻至多一个在途，
//! 不同用户的变更完全并行，没有全局锁。

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};

use crate::error::{PointError, Result};

/// 锁配置
#[derive(Debug, Clone)]
pub struct LockConfig {
    /// 获取锁的最长等待时间，超时后以 `LockTimeout` 返回。
    /// 锁只在一次读取-校验-写入期间持有，正常情况下等待远小于该上限。
    pub acquire_timeout: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// 用户锁守卫
///
/// RAII 包装：守卫在作用域结束（包括错误提前返回）时自动释放锁，
/// 不需要也不允许显式解锁。
#[derive(Debug)]
pub struct UserLockGuard {
    user_id: i64,
    _guard: OwnedMutexGuard<()>,
}

impl UserLockGuard {
    /// 当前守卫对应的用户 ID
    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

/// 用户锁注册表
///
/// 每个用户 ID 懒创建一把异步互斥锁；并发的首次获取者通过
/// `DashMap::entry` 的原子性保证拿到同一个锁实例。
/// 锁一旦创建便不再回收，注册表大小以出现过的用户数为上界。
pub struct LockRegistry {
    locks: DashMap<i64, Arc<Mutex<()>>>,
    config: LockConfig,
}

impl Default for LockRegistry {
    fn default() -> Self {
        Self::new(LockConfig::default())
    }
}

impl LockRegistry {
    /// 创建锁注册表
    pub fn new(config: LockConfig) -> Self {
        Self {
            locks: DashMap::new(),
            config,
        }
    }

    /// 获取指定用户的锁
    ///
    /// 在配置的等待上限内阻塞等待；超时返回 `LockTimeout`（可重试）。
    pub async fn acquire(&self, user_id: i64) -> Result<UserLockGuard> {
        let mutex = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        match tokio::time::timeout(self.config.acquire_timeout, mutex.lock_owned()).await {
            Ok(guard) => {
                debug!(user_id = user_id, "user lock acquired");
                Ok(UserLockGuard {
                    user_id,
                    _guard: guard,
                })
            }
            Err(_) => {
                warn!(
                    user_id = user_id,
                    timeout_ms = self.config.acquire_timeout.as_millis() as u64,
                    "user lock acquisition timed out"
                );
                Err(PointError::LockTimeout { user_id })
            }
        }
    }

    /// 已创建的锁数量（等于出现过变更请求的用户数）
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}
