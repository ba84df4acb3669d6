//! 优惠券管理核心
//!
//! 提供优惠券的创建校验、查询、条件搜索和删除，以及用户记录的 CRUD 与黑名单查询。
//!
//! ## 模块结构
//!
//! - `models`: 领域模型（优惠券、折扣策略、用户）
//! - `error`: 错误类型定义
//! - `repository`: 语句构建器、schema 元数据、仓储接口与实现
//! - `service`: 业务服务层

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, VoucherError};
pub use models::*;
pub use repository::{
    BlackListRepository, BlackListRepositoryTrait, MemoryBlackListRepository,
    MemoryUserRepository, MemoryVoucherRepository, SearchCondition, Statement, StatementError,
    UserRepository, UserRepositoryTrait, VoucherRepository, VoucherRepositoryTrait,
};
pub use service::{UserService, VoucherService, dto};
