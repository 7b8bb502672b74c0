//! Typed clause nodes.
//!
//! A statement is a tagged union keyed by statement kind; switching kind means
//! constructing a fresh variant, so clauses can never leak from a previous
//! statement. Rendering lives in [`crate::compile`] and the grammar order is
//! enforced there, not by call order.

use crate::error::{DbError, DbResult};
use crate::value::Value;

/// One in-progress statement.
#[derive(Debug, Clone)]
pub enum Statement {
    Select(SelectStmt),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
}

impl Default for Statement {
    fn default() -> Self {
        Self::Select(SelectStmt::default())
    }
}

/// A table reference: a dotted name path, or a raw fragment the caller asserts
/// is already valid SQL.
#[derive(Debug, Clone)]
pub enum TableRef {
    Name(String),
    Raw(String),
}

/// A term appearing in a value position: a tagged literal, or a raw fragment.
#[derive(Debug, Clone)]
pub enum Term {
    Value(Value),
    Raw(String),
}

/// Aggregate functions available as select-list helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggFunc {
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl AggFunc {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Avg => "AVG",
            Self::Sum => "SUM",
            Self::Count => "COUNT",
        }
    }
}

/// One entry of the select-column list.
#[derive(Debug, Clone)]
pub enum SelectItem {
    /// A (possibly dotted, possibly aliased) column name.
    Column(String),
    /// An aggregate call over a column name.
    Aggregate { func: AggFunc, column: String },
    /// A raw fragment, inserted without quoting.
    Raw(String),
}

/// Boolean delimiter between WHERE conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conj {
    And,
    Or,
}

impl Conj {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// A single WHERE condition with its leading delimiter.
///
/// The delimiter is rendered only when a previous condition exists; the first
/// condition carries one too, but it is never printed.
#[derive(Debug, Clone)]
pub struct Cond {
    pub conj: Conj,
    pub expr: CondExpr,
}

/// The body of a WHERE condition.
#[derive(Debug, Clone)]
pub enum CondExpr {
    /// `column op value`, with the column quoted and the value rendered as a
    /// literal (or placeholder token).
    Cmp {
        column: String,
        op: String,
        value: Value,
    },
    /// A raw fragment, inserted without quoting.
    Raw(String),
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction case-insensitively; anything other than `asc`/`desc`
    /// is a caller error.
    pub fn parse(s: &str) -> DbResult<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(DbError::invalid_argument(format!(
                "invalid ORDER BY direction '{s}', expected ASC or DESC"
            )))
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ORDER BY term: a quoted column list with a shared direction, or a raw
/// fragment.
#[derive(Debug, Clone)]
pub enum OrderTerm {
    Columns {
        columns: Vec<String>,
        direction: Direction,
    },
    Raw(String),
}

/// LIMIT clause. The textual ordering of count and offset is dialect-specific.
#[derive(Debug, Clone, Copy)]
pub struct Limit {
    pub count: u64,
    pub offset: Option<u64>,
}

/// Accumulated SELECT clauses.
#[derive(Debug, Clone, Default)]
pub struct SelectStmt {
    pub distinct: bool,
    pub items: Vec<SelectItem>,
    pub from: Option<TableRef>,
    pub conds: Vec<Cond>,
    pub order: Vec<OrderTerm>,
    pub limit: Option<Limit>,
}

/// Accumulated INSERT clauses.
#[derive(Debug, Clone, Default)]
pub struct InsertStmt {
    pub table: Option<TableRef>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Term>>,
}

/// One UPDATE assignment.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub term: Term,
}

/// Accumulated UPDATE clauses.
#[derive(Debug, Clone, Default)]
pub struct UpdateStmt {
    pub table: Option<TableRef>,
    pub assignments: Vec<Assignment>,
    pub conds: Vec<Cond>,
}

/// Accumulated DELETE clauses.
#[derive(Debug, Clone, Default)]
pub struct DeleteStmt {
    pub table: Option<TableRef>,
    pub conds: Vec<Cond>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(Direction::parse("asc").unwrap(), Direction::Asc);
        assert_eq!(Direction::parse("DESC").unwrap(), Direction::Desc);
        assert_eq!(Direction::parse("Desc").unwrap(), Direction::Desc);
    }

    #[test]
    fn direction_rejects_everything_else() {
        let err = Direction::parse("sideways").unwrap_err();
        assert!(matches!(err, DbError::InvalidArgument(_)));
    }

    #[test]
    fn default_statement_is_empty_select() {
        match Statement::default() {
            Statement::Select(s) => {
                assert!(s.items.is_empty());
                assert!(s.from.is_none());
            }
            _ => panic!("default statement should be SELECT"),
        }
    }
}
