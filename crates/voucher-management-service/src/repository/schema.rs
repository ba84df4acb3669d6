//! 表结构元数据
//!
//! 语句构建器使用的全部表名和列名都在这里以常量声明，不接受任何请求派生的字符串。
//!
//! 对应的 PostgreSQL 表结构：
//!
//! ```sql
//! CREATE TABLE vouchers (
//!     id          VARCHAR(36) PRIMARY KEY,
//!     discount    INTEGER     NOT NULL,
//!     expired_at  TIMESTAMPTZ NOT NULL,
//!     type        VARCHAR(16) NOT NULL,
//!     status      VARCHAR(16) NOT NULL
//! );
//!
//! CREATE TABLE users (
//!     id   VARCHAR(36) PRIMARY KEY,
//!     name VARCHAR(50) NOT NULL
//! );
//!
//! CREATE TABLE blacklist (
//!     name VARCHAR(50) PRIMARY KEY
//! );
//! ```

use super::statement::{Column, Table};

/// 优惠券表
pub mod vouchers {
    use super::{Column, Table};

    pub const TABLE: Table = Table::new("vouchers");

    pub const ID: Column = Column::new("id");
    pub const DISCOUNT: Column = Column::new("discount");
    pub const EXPIRED_AT: Column = Column::new("expired_at");
    pub const TYPE: Column = Column::new("type");
    pub const STATUS: Column = Column::new("status");

    /// 全部列，按插入与投影顺序排列
    pub const ALL: [Column; 5] = [ID, DISCOUNT, EXPIRED_AT, TYPE, STATUS];
}

/// 用户表
pub mod users {
    use super::{Column, Table};

    pub const TABLE: Table = Table::new("users");

    pub const ID: Column = Column::new("id");
    pub const NAME: Column = Column::new("name");

    pub const ALL: [Column; 2] = [ID, NAME];
}

/// 黑名单表，由外部维护，本服务只读
pub mod blacklist {
    use super::{Column, Table};

    pub const TABLE: Table = Table::new("blacklist");

    pub const NAME: Column = Column::new("name");
}

/// 服务依赖的全部表名，就绪探针据此检查表是否存在
pub const TABLE_NAMES: [&str; 3] = [
    vouchers::TABLE.name(),
    users::TABLE.name(),
    blacklist::TABLE.name(),
];
