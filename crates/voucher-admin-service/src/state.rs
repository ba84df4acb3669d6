//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use voucher_management::{
    BlackListRepository, BlackListRepositoryTrait, MemoryBlackListRepository,
    MemoryUserRepository, MemoryVoucherRepository, UserRepository, UserRepositoryTrait,
    UserService, VoucherRepository, VoucherRepositoryTrait, VoucherService,
};
use voucher_shared::database::Database;

/// Axum 应用共享状态
///
/// 服务通过 Arc 在 handler 间共享，仓储实现在构造时选定
#[derive(Clone)]
pub struct AppState {
    pub voucher_service: Arc<VoucherService>,
    pub user_service: Arc<UserService>,
    /// 就绪探针使用，内存模式下为 None
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(
        voucher_repo: Arc<dyn VoucherRepositoryTrait>,
        user_repo: Arc<dyn UserRepositoryTrait>,
        blacklist_repo: Arc<dyn BlackListRepositoryTrait>,
    ) -> Self {
        Self {
            voucher_service: Arc::new(VoucherService::new(voucher_repo)),
            user_service: Arc::new(UserService::new(user_repo, blacklist_repo)),
            database: None,
        }
    }

    /// PostgreSQL 仓储
    pub fn with_database(database: Database) -> Self {
        let pool = database.pool().clone();
        Self {
            database: Some(database),
            ..Self::new(
                Arc::new(VoucherRepository::new(pool.clone())),
                Arc::new(UserRepository::new(pool.clone())),
                Arc::new(BlackListRepository::new(pool)),
            )
        }
    }

    /// 内存仓储，用于测试和本地开发
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryVoucherRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryBlackListRepository::new()),
        )
    }
}
