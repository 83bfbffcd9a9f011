//! 共享库
//!
//! 包含钱包服务共用的配置加载、可观测性初始化和测试工具。

pub mod config;
pub mod observability;
pub mod test_utils;
