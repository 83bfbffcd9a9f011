//! 请求 DTO 定义

use serde::Deserialize;

/// 充值/使用请求体
///
/// 金额的业务校验（正数、粒度、上限）在服务层完成，
/// 这里只负责反序列化。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRequest {
    pub amount: i64,
}
