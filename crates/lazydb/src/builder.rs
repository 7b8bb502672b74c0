//! The fluent query builder.
//!
//! One builder per statement. Statement-kind-switching calls ([`Query::select`],
//! [`Query::insert_into`], [`Query::update`], [`Query::delete_from`]) construct
//! a fresh clause set, so clauses never persist across a kind switch. Every
//! structured method has a `*_raw` counterpart that accepts a pre-formed SQL
//! fragment and bypasses quoting entirely; that fragment is the caller's
//! responsibility.
//!
//! Caller errors discovered mid-chain (a bad ORDER BY direction, a clause that
//! does not belong to the current statement kind) are stored and surfaced by
//! [`Query::to_sql`], keeping the chaining surface infallible.
//!
//! # Example
//! ```ignore
//! use lazydb::Query;
//!
//! let sql = Query::new()
//!     .select(&["id"])
//!     .from("users")
//!     .where_("id", "=", 1)
//!     .to_sql()?;
//! assert_eq!(sql, "SELECT `id` FROM `users` WHERE `id` = 1;");
//! # Ok::<(), lazydb::DbError>(())
//! ```

use crate::ast::{
    AggFunc, Assignment, Cond, CondExpr, Conj, DeleteStmt, Direction, InsertStmt, Limit, OrderTerm,
    SelectItem, SelectStmt, Statement, TableRef, Term, UpdateStmt,
};
use crate::compile::Compiler;
use crate::error::{DbError, DbResult};
use crate::quote::Dialect;
use crate::value::Value;

/// A fluent, single-statement query builder.
#[derive(Debug, Clone, Default)]
pub struct Query {
    compiler: Compiler,
    statement: Statement,
    build_error: Option<String>,
}

impl Query {
    /// Create a builder for the default dialect (MySQL).
    ///
    /// The initial statement kind is an empty SELECT.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a specific dialect.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            compiler: Compiler::new(dialect),
            ..Default::default()
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.compiler.dialect
    }

    // ==================== Statement kind switches ====================

    /// Start a SELECT statement with the given columns.
    ///
    /// Resets all clauses. An empty column list renders as `*`.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.reset(Statement::Select(SelectStmt {
            items: columns
                .iter()
                .map(|c| SelectItem::Column(c.to_string()))
                .collect(),
            ..Default::default()
        }));
        self
    }

    /// Start a SELECT statement from a raw select-list fragment.
    pub fn select_raw(mut self, expr: &str) -> Self {
        self.reset(Statement::Select(SelectStmt {
            items: vec![SelectItem::Raw(expr.to_string())],
            ..Default::default()
        }));
        self
    }

    /// Start an INSERT statement targeting `table`. Resets all clauses.
    pub fn insert_into(mut self, table: &str) -> Self {
        self.reset(Statement::Insert(InsertStmt {
            table: Some(TableRef::Name(table.to_string())),
            ..Default::default()
        }));
        self
    }

    /// Start an INSERT statement with a raw table fragment.
    pub fn insert_into_raw(mut self, expr: &str) -> Self {
        self.reset(Statement::Insert(InsertStmt {
            table: Some(TableRef::Raw(expr.to_string())),
            ..Default::default()
        }));
        self
    }

    /// Start an UPDATE statement targeting `table`. Resets all clauses.
    pub fn update(mut self, table: &str) -> Self {
        self.reset(Statement::Update(UpdateStmt {
            table: Some(TableRef::Name(table.to_string())),
            ..Default::default()
        }));
        self
    }

    /// Start an UPDATE statement with a raw table fragment.
    pub fn update_raw(mut self, expr: &str) -> Self {
        self.reset(Statement::Update(UpdateStmt {
            table: Some(TableRef::Raw(expr.to_string())),
            ..Default::default()
        }));
        self
    }

    /// Start a DELETE statement targeting `table`. Resets all clauses.
    pub fn delete_from(mut self, table: &str) -> Self {
        self.reset(Statement::Delete(DeleteStmt {
            table: Some(TableRef::Name(table.to_string())),
            ..Default::default()
        }));
        self
    }

    /// Start a DELETE statement with a raw table fragment.
    pub fn delete_from_raw(mut self, expr: &str) -> Self {
        self.reset(Statement::Delete(DeleteStmt {
            table: Some(TableRef::Raw(expr.to_string())),
            ..Default::default()
        }));
        self
    }

    fn reset(&mut self, statement: Statement) {
        self.statement = statement;
        self.build_error = None;
    }

    // ==================== SELECT clauses ====================

    /// Make the SELECT statement distinct.
    pub fn distinct(mut self) -> Self {
        match &mut self.statement {
            Statement::Select(s) => s.distinct = true,
            _ => self.record_error("DISTINCT is only valid for SELECT"),
        }
        self
    }

    /// Set the FROM target of a SELECT statement.
    pub fn from(mut self, table: &str) -> Self {
        match &mut self.statement {
            Statement::Select(s) => s.from = Some(TableRef::Name(table.to_string())),
            _ => self.record_error("FROM is only valid for SELECT"),
        }
        self
    }

    /// Set the FROM target from a raw fragment.
    pub fn from_raw(mut self, expr: &str) -> Self {
        match &mut self.statement {
            Statement::Select(s) => s.from = Some(TableRef::Raw(expr.to_string())),
            _ => self.record_error("FROM is only valid for SELECT"),
        }
        self
    }

    /// Append a select-list column without replacing existing ones.
    pub fn add_select(mut self, column: &str) -> Self {
        match &mut self.statement {
            Statement::Select(s) => s.items.push(SelectItem::Column(column.to_string())),
            _ => self.record_error("select columns are only valid for SELECT"),
        }
        self
    }

    // ==================== Aggregates ====================
    // Each helper appends a function-call fragment to the select-column list.

    /// Append `MIN(column)` to the select list.
    pub fn min(self, column: &str) -> Self {
        self.aggregate(AggFunc::Min, column)
    }

    /// Append `MAX(column)` to the select list.
    pub fn max(self, column: &str) -> Self {
        self.aggregate(AggFunc::Max, column)
    }

    /// Append `AVG(column)` to the select list.
    pub fn avg(self, column: &str) -> Self {
        self.aggregate(AggFunc::Avg, column)
    }

    /// Append `SUM(column)` to the select list.
    pub fn sum(self, column: &str) -> Self {
        self.aggregate(AggFunc::Sum, column)
    }

    /// Append `COUNT(column)` to the select list; `*` stays unquoted.
    pub fn count(self, column: &str) -> Self {
        self.aggregate(AggFunc::Count, column)
    }

    fn aggregate(mut self, func: AggFunc, column: &str) -> Self {
        match &mut self.statement {
            Statement::Select(s) => s.items.push(SelectItem::Aggregate {
                func,
                column: column.to_string(),
            }),
            _ => self.record_error("aggregates are only valid for SELECT"),
        }
        self
    }

    // ==================== WHERE ====================

    /// Add a `column op value` condition, AND-delimited.
    ///
    /// The first condition carries no leading delimiter.
    pub fn where_(self, column: &str, op: &str, value: impl Into<Value>) -> Self {
        self.push_cond(Conj::And, CondExpr::Cmp {
            column: column.to_string(),
            op: op.to_string(),
            value: value.into(),
        })
    }

    /// Alias of [`Query::where_`].
    pub fn and_where(self, column: &str, op: &str, value: impl Into<Value>) -> Self {
        self.where_(column, op, value)
    }

    /// Add a `column op value` condition, OR-delimited.
    pub fn or_where(self, column: &str, op: &str, value: impl Into<Value>) -> Self {
        self.push_cond(Conj::Or, CondExpr::Cmp {
            column: column.to_string(),
            op: op.to_string(),
            value: value.into(),
        })
    }

    /// Add a raw condition fragment, AND-delimited.
    pub fn where_raw(self, expr: &str) -> Self {
        self.push_cond(Conj::And, CondExpr::Raw(expr.to_string()))
    }

    /// Alias of [`Query::where_raw`].
    pub fn and_where_raw(self, expr: &str) -> Self {
        self.where_raw(expr)
    }

    /// Add a raw condition fragment, OR-delimited.
    pub fn or_where_raw(self, expr: &str) -> Self {
        self.push_cond(Conj::Or, CondExpr::Raw(expr.to_string()))
    }

    fn push_cond(mut self, conj: Conj, expr: CondExpr) -> Self {
        let conds = match &mut self.statement {
            Statement::Select(s) => Some(&mut s.conds),
            Statement::Update(s) => Some(&mut s.conds),
            Statement::Delete(s) => Some(&mut s.conds),
            Statement::Insert(_) => None,
        };
        match conds {
            Some(conds) => conds.push(Cond { conj, expr }),
            None => self.record_error("WHERE is not valid for INSERT"),
        }
        self
    }

    // ==================== ORDER BY / LIMIT ====================

    /// Add an ORDER BY term over `columns` with a textual direction.
    ///
    /// The direction must be `asc` or `desc` in any case; anything else is an
    /// [`DbError::InvalidArgument`] surfaced by [`Query::to_sql`].
    pub fn order_by(mut self, columns: &[&str], direction: &str) -> Self {
        match Direction::parse(direction) {
            Ok(direction) => self.push_order(OrderTerm::Columns {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                direction,
            }),
            Err(err) => self.record_error(err.to_string()),
        }
        self
    }

    /// Add an `ORDER BY ... ASC` term.
    pub fn order_by_asc(mut self, columns: &[&str]) -> Self {
        self.push_order(OrderTerm::Columns {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            direction: Direction::Asc,
        });
        self
    }

    /// Add an `ORDER BY ... DESC` term.
    pub fn order_by_desc(mut self, columns: &[&str]) -> Self {
        self.push_order(OrderTerm::Columns {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            direction: Direction::Desc,
        });
        self
    }

    /// Add a raw ORDER BY term.
    pub fn order_by_raw(mut self, expr: &str) -> Self {
        self.push_order(OrderTerm::Raw(expr.to_string()));
        self
    }

    fn push_order(&mut self, term: OrderTerm) {
        match &mut self.statement {
            Statement::Select(s) => s.order.push(term),
            _ => self.record_error("ORDER BY is only valid for SELECT"),
        }
    }

    /// Set the LIMIT row count.
    pub fn limit(mut self, count: u64) -> Self {
        self.set_limit(Limit {
            count,
            offset: None,
        });
        self
    }

    /// Set the LIMIT row count together with an offset.
    ///
    /// How the two render textually depends on the dialect.
    pub fn limit_with_offset(mut self, count: u64, offset: u64) -> Self {
        self.set_limit(Limit {
            count,
            offset: Some(offset),
        });
        self
    }

    fn set_limit(&mut self, limit: Limit) {
        match &mut self.statement {
            Statement::Select(s) => s.limit = Some(limit),
            _ => self.record_error("LIMIT is only valid for SELECT"),
        }
    }

    // ==================== INSERT values ====================

    /// Add a column/value pair to the single-row INSERT being built.
    pub fn value(self, column: &str, value: impl Into<Value>) -> Self {
        self.push_value(column, Term::Value(value.into()))
    }

    /// Add a column with a raw value fragment to the INSERT being built.
    pub fn value_raw(self, column: &str, expr: &str) -> Self {
        self.push_value(column, Term::Raw(expr.to_string()))
    }

    /// Add several column/value pairs at once.
    pub fn values(mut self, pairs: &[(&str, Value)]) -> Self {
        for (column, value) in pairs {
            self = self.push_value(column, Term::Value(value.clone()));
        }
        self
    }

    /// Append a full extra VALUES row (for multi-row INSERT).
    ///
    /// The row must match the column list built up by [`Query::value`] calls.
    pub fn values_row(mut self, row: Vec<Value>) -> Self {
        let error = match &mut self.statement {
            Statement::Insert(s) => {
                if !s.columns.is_empty() && row.len() != s.columns.len() {
                    Some(format!(
                        "VALUES row has {} values but {} columns are set",
                        row.len(),
                        s.columns.len()
                    ))
                } else {
                    s.rows.push(row.into_iter().map(Term::Value).collect());
                    None
                }
            }
            _ => Some("VALUES is only valid for INSERT".to_string()),
        };
        if let Some(error) = error {
            self.record_error(error);
        }
        self
    }

    fn push_value(mut self, column: &str, term: Term) -> Self {
        match &mut self.statement {
            Statement::Insert(s) => {
                s.columns.push(column.to_string());
                if s.rows.is_empty() {
                    s.rows.push(Vec::new());
                }
                s.rows[0].push(term);
            }
            _ => self.record_error("values are only valid for INSERT"),
        }
        self
    }

    // ==================== UPDATE assignments ====================

    /// Add a SET assignment to the UPDATE being built.
    pub fn set(self, column: &str, value: impl Into<Value>) -> Self {
        self.push_assignment(column, Term::Value(value.into()))
    }

    /// Add a SET assignment with a raw value fragment.
    pub fn set_raw(self, column: &str, expr: &str) -> Self {
        self.push_assignment(column, Term::Raw(expr.to_string()))
    }

    fn push_assignment(mut self, column: &str, term: Term) -> Self {
        match &mut self.statement {
            Statement::Update(s) => s.assignments.push(Assignment {
                column: column.to_string(),
                term,
            }),
            _ => self.record_error("SET is only valid for UPDATE"),
        }
        self
    }

    // ==================== Rendering ====================

    /// Render the accumulated statement as SQL.
    ///
    /// Surfaces any deferred builder error first, then compiles; a missing
    /// mandatory clause is [`DbError::Incomplete`].
    pub fn to_sql(&self) -> DbResult<String> {
        if let Some(message) = &self.build_error {
            return Err(DbError::InvalidArgument(message.clone()));
        }
        self.compiler.compile_statement(&self.statement)
    }

    /// The accumulated clause set, for inspection.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    fn record_error(&mut self, message: impl Into<String>) {
        // Keep the first error; later ones are usually knock-on effects.
        if self.build_error.is_none() {
            self.build_error = Some(message.into());
        }
    }
}
