//! 用户锁模块
//!
//! 提供按用户 ID 串行化余额变更的进程内互斥机制。
//!
//! ## 设计理念
//!
//! - **按用户隔离**: 每个用户一把锁，不同用户的操作互不阻塞
//! - **懒创建**: 锁在首次获取时创建，并发创建是原子的
//! - **RAII 守卫**: 通过 `UserLockGuard` 确保任何退出路径都释放锁
//! - **有界等待**: 获取锁受配置的超时约束，不会无限阻塞调用方
//!
//! 注册表作为一项能力注入服务层（`Arc<LockRegistry>`），
//! 而不是隐藏的全局静态变量。

mod lock_registry;

pub use lock_registry::{LockConfig, LockRegistry, UserLockGuard};
