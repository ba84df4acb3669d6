//! 数据库连接管理模块
//!
//! 持有 PostgreSQL 连接池，提供连通性检查和表结构就绪检查。
//! 仓储层只持有 `PgPool` 的克隆，连接的生命周期由连接池负责。

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// 查询当前 schema 中已存在的表
const EXISTING_TABLES_SQL: &str = "SELECT table_name::text FROM information_schema.tables \
     WHERE table_schema = current_schema() AND table_name = ANY($1)";

/// 就绪检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// 连接可用且依赖的表都存在
    Ready,
    /// 连接可用但缺少部分表
    MissingTables(Vec<String>),
    /// 连接不可用
    Unavailable,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// 探针中使用的状态标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ok",
            Self::MissingTables(_) => "missing_tables",
            Self::Unavailable => "fail",
        }
    }

    pub fn missing_tables(&self) -> &[String] {
        match self {
            Self::MissingTables(tables) => tables,
            Self::Ready | Self::Unavailable => &[],
        }
    }
}

/// 数据库连接池包装
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 创建数据库连接池
    #[instrument(skip(config))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(
            max_connections = config.max_connections,
            "Connecting to database..."
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await?;

        info!("Database connection pool created");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 连通性检查
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// 返回 `tables` 中当前 schema 不存在的表，保持传入顺序
    pub async fn missing_tables(&self, tables: &[&str]) -> Result<Vec<String>> {
        let existing: Vec<String> = sqlx::query_scalar(EXISTING_TABLES_SQL)
            .bind(tables)
            .fetch_all(&self.pool)
            .await?;

        Ok(tables
            .iter()
            .filter(|table| !existing.iter().any(|name| name == *table))
            .map(|table| table.to_string())
            .collect())
    }

    /// 就绪检查：连接可用且 `tables` 全部存在
    pub async fn readiness(&self, tables: &[&str]) -> Readiness {
        if let Err(e) = self.health_check().await {
            warn!(error = %e, "数据库连通性检查失败");
            return Readiness::Unavailable;
        }

        match self.missing_tables(tables).await {
            Ok(missing) if missing.is_empty() => Readiness::Ready,
            Ok(missing) => {
                warn!(tables = ?missing, "数据库缺少依赖的表");
                Readiness::MissingTables(missing)
            }
            Err(e) => {
                warn!(error = %e, "表结构检查失败");
                Readiness::Unavailable
            }
        }
    }

    /// 关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}
