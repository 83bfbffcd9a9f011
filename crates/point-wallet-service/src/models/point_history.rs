//! 积分流水实体定义
//!
//! 流水只追加不修改，按插入顺序构成用户的审计轨迹。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TransactionType;

/// 积分流水
///
/// 每次成功的充值/使用恰好产生一条记录，金额始终为正数，
/// 符号由 transaction_type 决定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistory {
    /// 存储层分配的单调递增 ID
    pub id: i64,
    /// 用户 ID
    pub user_id: i64,
    /// 交易金额（正数）
    pub amount: i64,
    /// 交易类型
    pub transaction_type: TransactionType,
    /// 交易时间，与同一次变更的余额 updated_at 一致
    pub created_at: DateTime<Utc>,
}

impl PointHistory {
    /// 计算实际变动值（带符号）
    pub fn signed_amount(&self) -> i64 {
        self.amount * self.transaction_type.sign()
    }
}
