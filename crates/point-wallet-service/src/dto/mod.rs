//! 数据传输对象定义

pub mod request;
pub mod response;

pub use request::AmountRequest;
pub use response::{ApiResponse, PointHistoryResponse, UserPointResponse};
