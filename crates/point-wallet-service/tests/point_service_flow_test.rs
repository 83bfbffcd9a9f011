//! PointService 流程测试
//!
//! 使用真实的进程内存储组合服务，覆盖充值/使用/查询的完整业务场景，
//! 验证余额、流水与错误语义的一致性。

use std::sync::Arc;

use point_wallet::error::PointError;
use point_wallet::lock::LockRegistry;
use point_wallet::models::TransactionType;
use point_wallet::repository::{PointHistoryRepository, UserPointRepository};
use point_wallet::service::PointService;
use point_wallet::state::WalletPointService;

/// 创建一套全新的服务实例（独立存储，测试间互不影响）
fn setup() -> (
    Arc<WalletPointService>,
    Arc<UserPointRepository>,
    Arc<PointHistoryRepository>,
) {
    let user_point_repo = Arc::new(UserPointRepository::new());
    let point_history_repo = Arc::new(PointHistoryRepository::new());
    let service = Arc::new(PointService::new(
        user_point_repo.clone(),
        point_history_repo.clone(),
        Arc::new(LockRegistry::default()),
    ));
    (service, user_point_repo, point_history_repo)
}

#[tokio::test]
async fn test_get_point_fail_for_fresh_user() {
    let (service, _, _) = setup();

    let err = service.get_user_point(1).await.unwrap_err();
    assert!(matches!(err, PointError::UserPointNotFound(1)));
}

#[tokio::test]
async fn test_charge_then_get() {
    let (service, _, _) = setup();

    service.charge_user_point(1, 5000).await.unwrap();

    let point = service.get_user_point(1).await.unwrap();
    assert_eq!(point.user_id, 1);
    assert_eq!(point.point, 5000);
}

#[tokio::test]
async fn test_get_point_is_idempotent() {
    let (service, _, _) = setup();
    service.charge_user_point(1, 3000).await.unwrap();

    let first = service.get_user_point(1).await.unwrap();
    let second = service.get_user_point(1).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_charge_and_use_history_order() {
    let (service, _, _) = setup();

    service.charge_user_point(2, 5000).await.unwrap();
    let updated = service.use_user_point(2, 2000).await.unwrap();
    assert_eq!(updated.point, 3000);

    let histories = service.get_user_point_histories(2).await.unwrap();
    assert_eq!(histories.len(), 2);
    assert_eq!(histories[0].transaction_type, TransactionType::Charge);
    assert_eq!(histories[0].amount, 5000);
    assert_eq!(histories[1].transaction_type, TransactionType::Use);
    assert_eq!(histories[1].amount, 2000);
}

#[tokio::test]
async fn test_history_and_balance_share_mutation_instant() {
    let (service, _, _) = setup();

    let updated = service.charge_user_point(1, 1000).await.unwrap();
    let histories = service.get_user_point_histories(1).await.unwrap();

    // 同一次变更的流水时间与余额更新时间一致
    assert_eq!(histories[0].created_at, updated.updated_at);
}

#[tokio::test]
async fn test_charge_per_request_ceiling_keeps_balance() {
    let (service, _, _) = setup();

    // 四次到达 40000
    for _ in 0..4 {
        service.charge_user_point(1, 10_000).await.unwrap();
    }
    assert_eq!(service.get_user_point(1).await.unwrap().point, 40_000);

    // 超过单次上限的请求在访问存储前被拒绝，余额不变
    let err = service.charge_user_point(1, 10_001).await.unwrap_err();
    assert!(matches!(err, PointError::PolicyViolation { amount: 10_001, .. }));
    assert_eq!(service.get_user_point(1).await.unwrap().point, 40_000);
    assert_eq!(service.get_user_point_histories(1).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_charge_balance_limit_boundary_then_exceeded() {
    let (service, _, _) = setup();

    // 恰好充到上限 50000 是允许的
    for _ in 0..5 {
        service.charge_user_point(1, 10_000).await.unwrap();
    }
    assert_eq!(service.get_user_point(1).await.unwrap().point, 50_000);

    // 任何再充值都会超过上限，余额与流水保持不变
    let err = service.charge_user_point(1, 10).await.unwrap_err();
    assert!(matches!(
        err,
        PointError::LimitExceeded {
            current: 50_000,
            amount: 10,
            ..
        }
    ));
    assert_eq!(service.get_user_point(1).await.unwrap().point, 50_000);
    assert_eq!(service.get_user_point_histories(1).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_use_on_fresh_user_leaves_no_trace() {
    let (service, user_point_repo, point_history_repo) = setup();

    let err = service.use_user_point(3, 1).await.unwrap_err();
    assert!(matches!(
        err,
        PointError::InsufficientBalance {
            current: 0,
            amount: 1,
        }
    ));

    // 失败的使用不产生流水，也不创建余额记录
    assert_eq!(point_history_repo.count(), 0);
    assert_eq!(user_point_repo.count(), 0);

    let err = service.get_user_point_histories(3).await.unwrap_err();
    assert!(matches!(err, PointError::PointHistoryNotFound(3)));
}

#[tokio::test]
async fn test_use_exact_balance_to_zero() {
    let (service, _, _) = setup();

    service.charge_user_point(1, 2000).await.unwrap();
    let updated = service.use_user_point(1, 2000).await.unwrap();
    assert_eq!(updated.point, 0);

    // 余额为 0 的记录仍然存在，可以继续查询
    assert_eq!(service.get_user_point(1).await.unwrap().point, 0);
}

#[tokio::test]
async fn test_use_without_unit_restriction() {
    let (service, _, _) = setup();

    service.charge_user_point(1, 1000).await.unwrap();
    // 使用金额不要求 10 的倍数
    let updated = service.use_user_point(1, 333).await.unwrap();
    assert_eq!(updated.point, 667);
}

#[tokio::test]
async fn test_empty_history_is_an_error() {
    let (service, _, _) = setup();

    // 继承原有语义：没有流水的用户按 NotFound 处理
    let err = service.get_user_point_histories(9).await.unwrap_err();
    assert!(matches!(err, PointError::PointHistoryNotFound(9)));
}
