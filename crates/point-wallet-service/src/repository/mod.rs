//! 存储协作方层
//!
//! 提供余额与流水两类数据的访问接口。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据存取，不包含业务校验
//! - 定义 trait 接口以支持 mock 测试
//! - 并发控制（按用户串行化）由调用方（服务层）决定

mod point_history_repo;
mod traits;
mod user_point_repo;

pub use point_history_repo::PointHistoryRepository;
pub use traits::*;
pub use user_point_repo::UserPointRepository;
