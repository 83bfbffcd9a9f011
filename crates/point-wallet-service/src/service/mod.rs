//! 服务层
//!
//! 实现积分业务逻辑，编排用户锁、领域模型与存储协作方。

pub mod point_service;

pub use point_service::{MAX_CHARGE_PER_REQUEST, PointService};
