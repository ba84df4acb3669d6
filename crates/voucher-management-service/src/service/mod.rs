//! 服务层
//!
//! 实现优惠券与用户的业务逻辑，协调仓储层。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `voucher_service`: 优惠券创建校验、查询、删除
//! - `user_service`: 用户记录 CRUD

pub mod dto;
pub mod user_service;
pub mod voucher_service;

pub use dto::*;
pub use user_service::{MAX_USER_NAME_LENGTH, UserService};
pub use voucher_service::VoucherService;
