//! SQL 语句构建器
//!
//! 将「语句类型 + 表 + 列元数据」渲染为带位置占位符（`$1..$n`）的 SQL 文本，不负责绑定参数。
//!
//! ## 占位符顺序
//!
//! 占位符的数量和顺序严格为：INSERT/UPDATE 的值列在前，谓词列在后。
//! 调用方必须按 [`Statement::bind_order`] 返回的顺序绑定参数，构建器只校验语句形状。
//!
//! ## 标识符来源
//!
//! 表名与列名只能来自 [`Table::new`] / [`Column::new`] 的 `&'static str` 常量
//! （见 `repository::schema`），因此渲染时不做任何转义。
//! 如需支持调用方传入的标识符，必须另行增加校验。

use std::fmt;

use thiserror::Error;

/// 表名（只能由静态 schema 元数据构造）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table(&'static str);

impl Table {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 列名（只能由静态 schema 元数据构造）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column(&'static str);

impl Column {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 语句类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Select,
    Insert,
    Update,
    Delete,
}

impl Clause {
    /// 用于日志和指标的小写标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// 谓词连接词
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    Where,
    And,
}

/// 语句构建错误
///
/// 全部属于调用方误用，语句元数据是编译期确定的，出现即为程序缺陷
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("AND 条件之前缺少 WHERE: table={table}, column={column}")]
    AndWithoutWhere {
        table: &'static str,
        column: &'static str,
    },

    #[error("重复的 WHERE 条件: table={table}, column={column}")]
    DuplicateWhere {
        table: &'static str,
        column: &'static str,
    },

    #[error("LIMIT 只能用于 SELECT 语句: clause={0}")]
    LimitOnNonSelect(&'static str),

    #[error("INSERT 语句不支持 WHERE 条件: table={0}")]
    PredicateOnInsert(&'static str),

    #[error("语句缺少列: clause={clause}, table={table}")]
    MissingColumns {
        clause: &'static str,
        table: &'static str,
    },
}

/// 语句描述符
///
/// 每个链式调用都消费旧描述符并返回新描述符，描述符本身不含任何参数值。
/// 渲染由纯函数 [`Statement::build`] 完成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    clause: Clause,
    table: Table,
    columns: Vec<Column>,
    predicates: Vec<(Connective, Column)>,
    limit: Option<u32>,
}

impl Statement {
    fn new(clause: Clause, table: Table, columns: &[Column]) -> Self {
        Self {
            clause,
            table,
            columns: columns.to_vec(),
            predicates: Vec::new(),
            limit: None,
        }
    }

    /// `SELECT columns FROM table`
    pub fn select_from(table: Table, columns: &[Column]) -> Self {
        Self::new(Clause::Select, table, columns)
    }

    /// `INSERT INTO table (columns) VALUES (...)`
    pub fn insert_into(table: Table, columns: &[Column]) -> Self {
        Self::new(Clause::Insert, table, columns)
    }

    /// `UPDATE table SET column = ?, ...`
    pub fn update(table: Table, set_columns: &[Column]) -> Self {
        Self::new(Clause::Update, table, set_columns)
    }

    /// `DELETE FROM table`
    pub fn delete_from(table: Table) -> Self {
        Self::new(Clause::Delete, table, &[])
    }

    /// 添加第一个谓词列
    pub fn where_eq(mut self, column: Column) -> Self {
        self.predicates.push((Connective::Where, column));
        self
    }

    /// 追加谓词列，可无限链式调用
    pub fn and_eq(mut self, column: Column) -> Self {
        self.predicates.push((Connective::And, column));
        self
    }

    /// 限制返回行数（仅 SELECT）
    pub fn limit(mut self, rows: u32) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn clause(&self) -> Clause {
        self.clause
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// 参数绑定顺序：值列在前，谓词列在后
    ///
    /// SELECT 的列是投影列，DELETE 没有值列，两者都只绑定谓词列
    pub fn bind_order(&self) -> Vec<Column> {
        let values = match self.clause {
            Clause::Insert | Clause::Update => self.columns.as_slice(),
            Clause::Select | Clause::Delete => &[],
        };

        values
            .iter()
            .copied()
            .chain(self.predicates.iter().map(|(_, column)| *column))
            .collect()
    }

    /// 渲染最终 SQL 文本
    pub fn build(&self) -> Result<String, StatementError> {
        self.validate()?;

        let mut position = 0usize;
        let mut next_placeholder = || {
            position += 1;
            format!("${}", position)
        };

        let mut sql = match self.clause {
            Clause::Select => format!(
                "SELECT {} FROM {}",
                join_columns(&self.columns),
                self.table
            ),
            Clause::Insert => {
                let placeholders: Vec<String> =
                    self.columns.iter().map(|_| next_placeholder()).collect();
                format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    self.table,
                    join_columns(&self.columns),
                    placeholders.join(", ")
                )
            }
            Clause::Update => {
                let assignments: Vec<String> = self
                    .columns
                    .iter()
                    .map(|column| format!("{} = {}", column, next_placeholder()))
                    .collect();
                format!("UPDATE {} SET {}", self.table, assignments.join(", "))
            }
            Clause::Delete => format!("DELETE FROM {}", self.table),
        };

        for (connective, column) in &self.predicates {
            let keyword = match connective {
                Connective::Where => "WHERE",
                Connective::And => "AND",
            };
            sql.push_str(&format!(" {} {} = {}", keyword, column, next_placeholder()));
        }

        if let Some(rows) = self.limit {
            sql.push_str(&format!(" LIMIT {}", rows));
        }

        Ok(sql)
    }

    fn validate(&self) -> Result<(), StatementError> {
        let table = self.table.name();

        if self.clause != Clause::Delete && self.columns.is_empty() {
            return Err(StatementError::MissingColumns {
                clause: self.clause.as_str(),
                table,
            });
        }

        if self.clause == Clause::Insert && !self.predicates.is_empty() {
            return Err(StatementError::PredicateOnInsert(table));
        }

        if self.clause != Clause::Select && self.limit.is_some() {
            return Err(StatementError::LimitOnNonSelect(self.clause.as_str()));
        }

        for (index, (connective, column)) in self.predicates.iter().enumerate() {
            match (index, connective) {
                (0, Connective::And) => {
                    return Err(StatementError::AndWithoutWhere {
                        table,
                        column: column.name(),
                    });
                }
                (i, Connective::Where) if i > 0 => {
                    return Err(StatementError::DuplicateWhere {
                        table,
                        column: column.name(),
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(Column::name)
        .collect::<Vec<_>>()
        .join(", ")
}
