//! 积分钱包服务
//!
//! 维护每个用户的积分余额，支持充值与使用，所有变更都会在
//! 只追加的流水中留下审计记录。
//!
//! ## 核心功能
//!
//! - **余额查询**：查询用户当前积分与最近变更时间
//! - **充值**：受单次上限（10000）、余额上限（50000）与 10 单位粒度约束
//! - **使用**：受当前余额约束，无粒度限制
//! - **流水查询**：按插入顺序返回用户全部变更记录
//! - **并发安全**：同一用户的变更按用户锁串行化，不同用户完全并行
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义（余额实体与纯转移函数、流水记录）
//! - `error`: 错误类型定义
//! - `repository`: 存储协作方接口与进程内实现
//! - `lock`: 用户锁注册表
//! - `service`: 业务服务层
//! - `dto` / `handlers` / `routes` / `state`: REST API 层

pub mod dto;
pub mod error;
pub mod handlers;
pub mod lock;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{PointError, Result};
pub use lock::{LockConfig, LockRegistry, UserLockGuard};
pub use models::*;
pub use repository::{PointHistoryRepository, UserPointRepository};
pub use service::{MAX_CHARGE_PER_REQUEST, PointService};
pub use state::{AppState, WalletPointService};
