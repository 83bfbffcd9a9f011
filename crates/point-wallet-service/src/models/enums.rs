//! 钱包服务枚举类型定义

use serde::{Deserialize, Serialize};

/// 积分交易类型
///
/// 流水金额始终记录为正数，符号由交易类型决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// 充值（+）- 增加余额
    Charge,
    /// 使用（-）- 扣减余额
    Use,
}

impl TransactionType {
    /// 返回该交易类型的数量符号
    /// 正数表示增加，负数表示减少
    pub fn sign(&self) -> i64 {
        match self {
            Self::Charge => 1,
            Self::Use => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_sign() {
        assert_eq!(TransactionType::Charge.sign(), 1);
        assert_eq!(TransactionType::Use.sign(), -1);
    }

    #[test]
    fn test_transaction_type_serde() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Charge).unwrap(),
            "\"CHARGE\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Use).unwrap(),
            "\"USE\""
        );
    }
}
