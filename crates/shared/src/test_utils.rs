//! 测试工具模块
//!
//! 提供集成测试共用的辅助函数，保证并行测试之间的数据隔离。

use std::sync::atomic::{AtomicI64, Ordering};

/// 生成唯一的测试用户 ID
///
/// 使用原子计数器确保并行测试时的唯一性，不同测试拿到的
/// 用户 ID 互不冲突，避免共享余额造成断言污染。
pub fn test_user_id() -> i64 {
    static COUNTER: AtomicI64 = AtomicI64::new(0);
    // 高位段与手写测试数据（1、2、3 这类小 ID）隔离
    1_000_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}
