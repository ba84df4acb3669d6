//! 优惠券管理后台服务
//!
//! 提供优惠券与用户记录的 REST API。
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义及 HTTP 状态码映射
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{ApiResponse, CreateUserRequest, UpdateUserRequest, VoucherSearchParams};
pub use error::{AdminError, Result};
pub use state::AppState;
