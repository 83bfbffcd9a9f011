//! 用户积分实体定义
//!
//! `UserPoint` 是积分变更的唯一事实来源：所有校验和余额计算都在
//! 纯函数的转移方法里完成，服务层只负责编排锁与存储。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PointError, Result};

/// 余额上限
pub const MAX_BALANCE: i64 = 50_000;

/// 充值金额粒度：只允许 10 的倍数
pub const CHARGE_UNIT: i64 = 10;

/// 用户积分余额
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPoint {
    /// 用户 ID
    pub user_id: i64,
    /// 当前余额（最小货币单位，始终非负）
    pub point: i64,
    /// 最近一次变更时间
    pub updated_at: DateTime<Utc>,
}

impl UserPoint {
    /// 创建零余额记录
    ///
    /// 用户在首次充值/使用时隐式创建，之前不存在任何记录
    pub fn empty(user_id: i64) -> Self {
        Self {
            user_id,
            point: 0,
            updated_at: Utc::now(),
        }
    }

    /// 计算充值后的余额
    ///
    /// 只做数值校验与计算，不产生任何副作用：
    /// - 金额必须为正数
    /// - 充值金额必须为 10 的倍数
    /// - 充值后余额不能超过 50000
    pub fn compute_charge(&self, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(PointError::InvalidAmount {
                amount,
                constraint: "金额必须大于 0",
            });
        }

        if amount % CHARGE_UNIT != 0 {
            return Err(PointError::InvalidAmount {
                amount,
                constraint: "充值金额必须为 10 的倍数",
            });
        }

        let new_point = self.point + amount;
        if new_point > MAX_BALANCE {
            return Err(PointError::LimitExceeded {
                current: self.point,
                amount,
                max: MAX_BALANCE,
            });
        }

        Ok(new_point)
    }

    /// 计算使用后的余额
    ///
    /// - 金额必须为正数
    /// - 使用金额不能超过当前余额
    pub fn compute_use(&self, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(PointError::InvalidAmount {
                amount,
                constraint: "金额必须大于 0",
            });
        }

        if amount > self.point {
            return Err(PointError::InsufficientBalance {
                current: self.point,
                amount,
            });
        }

        Ok(self.point - amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_point(point: i64) -> UserPoint {
        UserPoint {
            user_id: 1,
            point,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_charge_fail_zero_amount() {
        let err = user_point(1000).compute_charge(0).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { amount: 0, .. }));
    }

    #[test]
    fn test_charge_fail_negative_amount() {
        let err = user_point(1000).compute_charge(-100).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { amount: -100, .. }));
    }

    #[test]
    fn test_charge_fail_not_multiple_of_unit() {
        let err = user_point(1000).compute_charge(5).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { amount: 5, .. }));

        let err = user_point(1000).compute_charge(1001).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { .. }));
    }

    #[test]
    fn test_charge_fail_exceed_balance_limit() {
        let err = user_point(45_000).compute_charge(10_000).unwrap_err();
        assert!(matches!(
            err,
            PointError::LimitExceeded {
                current: 45_000,
                amount: 10_000,
                max: MAX_BALANCE,
            }
        ));
    }

    #[test]
    fn test_charge_success() {
        assert_eq!(user_point(1000).compute_charge(500).unwrap(), 1500);
    }

    #[test]
    fn test_charge_success_at_limit_boundary() {
        // 恰好到达上限是允许的
        assert_eq!(user_point(40_000).compute_charge(10_000).unwrap(), 50_000);
    }

    #[test]
    fn test_use_fail_zero_amount() {
        let err = user_point(0).compute_use(0).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { amount: 0, .. }));
    }

    #[test]
    fn test_use_fail_negative_amount() {
        let err = user_point(1000).compute_use(-100).unwrap_err();
        assert!(matches!(err, PointError::InvalidAmount { amount: -100, .. }));
    }

    #[test]
    fn test_use_fail_insufficient_balance() {
        let err = user_point(1000).compute_use(1001).unwrap_err();
        assert!(matches!(
            err,
            PointError::InsufficientBalance {
                current: 1000,
                amount: 1001,
            }
        ));
    }

    #[test]
    fn test_use_success() {
        assert_eq!(user_point(1000).compute_use(300).unwrap(), 700);
    }

    #[test]
    fn test_use_success_exact_balance() {
        // 余额可以用到恰好为 0
        assert_eq!(user_point(1000).compute_use(1000).unwrap(), 0);
    }

    #[test]
    fn test_use_has_no_unit_restriction() {
        // 使用金额不受 10 的倍数限制
        assert_eq!(user_point(1000).compute_use(1).unwrap(), 999);
    }

    #[test]
    fn test_empty_user_point() {
        let point = UserPoint::empty(42);
        assert_eq!(point.user_id, 42);
        assert_eq!(point.point, 0);
    }
}
