//! 数据库仓储层
//!
//! 提供优惠券、用户与黑名单的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - SQL 文本全部由 [`Statement`] 从静态 schema 元数据渲染
//! - 每次调用最多执行一条语句，不开启跨语句事务
//! - 定义 trait 接口以支持 mock 测试和内存实现

mod blacklist_repo;
mod condition;
mod memory;
pub mod schema;
mod statement;
mod traits;
mod user_repo;
mod voucher_repo;

pub use blacklist_repo::BlackListRepository;
pub use condition::SearchCondition;
pub use memory::{MemoryBlackListRepository, MemoryUserRepository, MemoryVoucherRepository};
pub use statement::{Clause, Column, Statement, StatementError, Table};
pub use traits::*;
pub use user_repo::UserRepository;
pub use voucher_repo::VoucherRepository;

use tracing::debug;
use voucher_shared::observability::metrics;

/// 已渲染的语句
///
/// 语句执行成功后调用 [`Rendered::executed`] 计数，失败的语句不计入指标
struct Rendered {
    sql: String,
    clause: &'static str,
    table: &'static str,
}

impl Rendered {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn executed(&self) {
        metrics::record_statement(self.clause, self.table);
    }
}

fn render(statement: &Statement) -> Result<Rendered, StatementError> {
    let sql = statement.build()?;
    debug!(
        clause = statement.clause().as_str(),
        table = statement.table().name(),
        sql = %sql,
        "渲染语句"
    );
    Ok(Rendered {
        sql,
        clause: statement.clause().as_str(),
        table: statement.table().name(),
    })
}
