//! The clause compiler: serializes typed clause nodes into SQL text.
//!
//! Keyword order is fixed here (`SELECT [DISTINCT] cols FROM source
//! [WHERE ...] [ORDER BY ...] [LIMIT ...]` and the INSERT/UPDATE/DELETE
//! equivalents), every statement is terminated with `;`, and a missing
//! mandatory clause is an explicit [`DbError::Incomplete`] rather than a
//! silently empty string.

use crate::ast::{
    Cond, CondExpr, DeleteStmt, Direction, InsertStmt, Limit, OrderTerm, SelectItem, SelectStmt,
    Statement, TableRef, Term, UpdateStmt,
};
use crate::error::{DbError, DbResult};
use crate::quote::Dialect;

/// Renders statements for one [`Dialect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    pub dialect: Dialect,
}

impl Compiler {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Compile a qualified name: `schema.table.column`, optionally followed by
    /// a case-insensitive ` as alias`.
    ///
    /// The dotted path splits into at most three segments, each quoted
    /// independently; the alias is quoted and appended as `AS <alias>`.
    pub fn compile_name(&self, name: &str) -> String {
        if let Some((base, alias)) = split_alias(name) {
            format!(
                "{} AS {}",
                self.compile_name_segments(base),
                self.dialect.quote_identifier(alias)
            )
        } else {
            self.compile_name_segments(name)
        }
    }

    fn compile_name_segments(&self, name: &str) -> String {
        name.splitn(3, '.')
            .map(|segment| self.dialect.quote_identifier(segment.trim()))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Compile an ORDER BY fragment: quoted, comma-joined columns followed by
    /// the normalized direction keyword.
    pub fn compile_order_by(&self, columns: &[&str], direction: &str) -> DbResult<String> {
        let direction = Direction::parse(direction)?;
        Ok(self.order_columns(
            &columns.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            direction,
        ))
    }

    fn order_columns(&self, columns: &[String], direction: Direction) -> String {
        let cols = columns
            .iter()
            .map(|c| self.compile_name(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}", cols, direction.keyword())
    }

    /// Compile a LIMIT fragment (the text after the `LIMIT` keyword).
    ///
    /// MySQL uses the positional `offset, count` form; Postgres uses
    /// `count OFFSET offset`.
    pub fn compile_limit(&self, count: u64, offset: Option<u64>) -> String {
        match (self.dialect, offset) {
            (_, None) => count.to_string(),
            (Dialect::MySql, Some(offset)) => format!("{offset}, {count}"),
            (Dialect::Postgres, Some(offset)) => format!("{count} OFFSET {offset}"),
        }
    }

    /// Compile any statement kind.
    pub fn compile_statement(&self, statement: &Statement) -> DbResult<String> {
        match statement {
            Statement::Select(s) => self.compile_select(s),
            Statement::Insert(s) => self.compile_insert(s),
            Statement::Update(s) => self.compile_update(s),
            Statement::Delete(s) => self.compile_delete(s),
        }
    }

    /// Compile a SELECT statement.
    pub fn compile_select(&self, stmt: &SelectStmt) -> DbResult<String> {
        let Some(from) = &stmt.from else {
            return Err(DbError::incomplete("SELECT statement has no FROM target"));
        };

        let mut sql = String::from(if stmt.distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        });

        if stmt.items.is_empty() {
            sql.push('*');
        } else {
            let items = stmt
                .items
                .iter()
                .map(|item| self.select_item(item))
                .collect::<Vec<_>>();
            sql.push_str(&items.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table_ref(from));

        self.push_where(&mut sql, &stmt.conds);

        if !stmt.order.is_empty() {
            let terms = stmt
                .order
                .iter()
                .map(|term| match term {
                    OrderTerm::Columns { columns, direction } => {
                        self.order_columns(columns, *direction)
                    }
                    OrderTerm::Raw(raw) => raw.clone(),
                })
                .collect::<Vec<_>>();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }

        if let Some(Limit { count, offset }) = stmt.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.compile_limit(count, offset));
        }

        sql.push(';');
        Ok(sql)
    }

    /// Compile an INSERT statement.
    pub fn compile_insert(&self, stmt: &InsertStmt) -> DbResult<String> {
        let Some(table) = &stmt.table else {
            return Err(DbError::incomplete("INSERT statement has no target table"));
        };
        if stmt.rows.is_empty() {
            return Err(DbError::incomplete("INSERT statement has no values"));
        }

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&self.table_ref(table));

        if !stmt.columns.is_empty() {
            let cols = stmt
                .columns
                .iter()
                .map(|c| self.compile_name(c))
                .collect::<Vec<_>>();
            sql.push_str(" (");
            sql.push_str(&cols.join(", "));
            sql.push(')');
        }

        sql.push_str(" VALUES ");
        let rows = stmt
            .rows
            .iter()
            .map(|row| {
                let terms = row.iter().map(|t| self.term(t)).collect::<Vec<_>>();
                format!("({})", terms.join(", "))
            })
            .collect::<Vec<_>>();
        sql.push_str(&rows.join(", "));

        sql.push(';');
        Ok(sql)
    }

    /// Compile an UPDATE statement.
    pub fn compile_update(&self, stmt: &UpdateStmt) -> DbResult<String> {
        let Some(table) = &stmt.table else {
            return Err(DbError::incomplete("UPDATE statement has no target table"));
        };
        if stmt.assignments.is_empty() {
            return Err(DbError::incomplete("UPDATE statement has no SET list"));
        }

        let mut sql = String::from("UPDATE ");
        sql.push_str(&self.table_ref(table));
        sql.push_str(" SET ");

        let assignments = stmt
            .assignments
            .iter()
            .map(|a| format!("{} = {}", self.compile_name(&a.column), self.term(&a.term)))
            .collect::<Vec<_>>();
        sql.push_str(&assignments.join(", "));

        self.push_where(&mut sql, &stmt.conds);

        sql.push(';');
        Ok(sql)
    }

    /// Compile a DELETE statement.
    pub fn compile_delete(&self, stmt: &DeleteStmt) -> DbResult<String> {
        let Some(table) = &stmt.table else {
            return Err(DbError::incomplete("DELETE statement has no target table"));
        };

        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.table_ref(table));
        self.push_where(&mut sql, &stmt.conds);
        sql.push(';');
        Ok(sql)
    }

    fn select_item(&self, item: &SelectItem) -> String {
        match item {
            SelectItem::Column(name) => self.compile_name(name),
            SelectItem::Aggregate { func, column } => {
                let inner = if column == "*" {
                    "*".to_string()
                } else {
                    self.compile_name(column)
                };
                format!("{}({})", func.keyword(), inner)
            }
            SelectItem::Raw(raw) => raw.clone(),
        }
    }

    fn table_ref(&self, table: &TableRef) -> String {
        match table {
            TableRef::Name(name) => self.compile_name(name),
            TableRef::Raw(raw) => raw.clone(),
        }
    }

    pub(crate) fn term(&self, term: &Term) -> String {
        match term {
            Term::Value(value) => self.dialect.quote_literal(value),
            Term::Raw(raw) => raw.clone(),
        }
    }

    fn push_where(&self, sql: &mut String, conds: &[Cond]) {
        for (i, cond) in conds.iter().enumerate() {
            if i == 0 {
                sql.push_str(" WHERE ");
            } else {
                sql.push(' ');
                sql.push_str(cond.conj.keyword());
                sql.push(' ');
            }
            match &cond.expr {
                CondExpr::Cmp { column, op, value } => {
                    sql.push_str(&self.compile_name(column));
                    sql.push(' ');
                    sql.push_str(op);
                    sql.push(' ');
                    sql.push_str(&self.dialect.quote_literal(value));
                }
                CondExpr::Raw(raw) => sql.push_str(raw),
            }
        }
    }
}

/// Split `name` on the first case-insensitive, whitespace-delimited `as`
/// token, returning the trimmed base name and alias.
fn split_alias(name: &str) -> Option<(&str, &str)> {
    let lower = name.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut search = 0;
    while let Some(found) = lower[search..].find("as") {
        let at = search + found;
        let end = at + 2;
        let preceded = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let followed = end < bytes.len() && bytes[end].is_ascii_whitespace();
        if preceded && followed {
            let base = name[..at].trim_end();
            let alias = name[end..].trim_start();
            if !base.is_empty() && !alias.is_empty() {
                return Some((base, alias));
            }
        }
        search = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AggFunc, Assignment, Conj};
    use crate::value::Value;

    fn mysql() -> Compiler {
        Compiler::new(Dialect::MySql)
    }

    #[test]
    fn name_single_segment() {
        assert_eq!(mysql().compile_name("users"), "`users`");
    }

    #[test]
    fn name_dotted_segments() {
        assert_eq!(
            mysql().compile_name("app.users.id"),
            "`app`.`users`.`id`"
        );
    }

    #[test]
    fn name_star_segment_unquoted() {
        assert_eq!(mysql().compile_name("users.*"), "`users`.*");
    }

    #[test]
    fn name_with_alias() {
        assert_eq!(
            mysql().compile_name("users.id as user_id"),
            "`users`.`id` AS `user_id`"
        );
    }

    #[test]
    fn name_alias_case_insensitive() {
        assert_eq!(mysql().compile_name("id AS x"), "`id` AS `x`");
        assert_eq!(mysql().compile_name("id As x"), "`id` AS `x`");
    }

    #[test]
    fn name_containing_as_substring_is_not_aliased() {
        // "based" contains "as" but it is not a whitespace-delimited token.
        assert_eq!(mysql().compile_name("based"), "`based`");
    }

    #[test]
    fn order_by_normalizes_direction() {
        assert_eq!(
            mysql().compile_order_by(&["name"], "asc").unwrap(),
            "`name` ASC"
        );
    }

    #[test]
    fn order_by_rejects_bad_direction() {
        let err = mysql().compile_order_by(&["name"], "sideways").unwrap_err();
        assert!(matches!(err, DbError::InvalidArgument(_)));
    }

    #[test]
    fn limit_without_offset() {
        assert_eq!(mysql().compile_limit(10, None), "10");
    }

    #[test]
    fn limit_with_offset_is_offset_first_on_mysql() {
        assert_eq!(mysql().compile_limit(10, Some(5)), "5, 10");
    }

    #[test]
    fn limit_with_offset_on_postgres() {
        let c = Compiler::new(Dialect::Postgres);
        assert_eq!(c.compile_limit(10, Some(5)), "10 OFFSET 5");
    }

    #[test]
    fn select_requires_from() {
        let err = mysql().compile_select(&SelectStmt::default()).unwrap_err();
        assert!(err.is_incomplete());
    }

    #[test]
    fn select_defaults_columns_to_star() {
        let stmt = SelectStmt {
            from: Some(TableRef::Name("users".into())),
            ..Default::default()
        };
        assert_eq!(
            mysql().compile_select(&stmt).unwrap(),
            "SELECT * FROM `users`;"
        );
    }

    #[test]
    fn select_full_clause_order() {
        let stmt = SelectStmt {
            distinct: true,
            items: vec![SelectItem::Column("id".into())],
            from: Some(TableRef::Name("users".into())),
            conds: vec![Cond {
                conj: Conj::And,
                expr: CondExpr::Cmp {
                    column: "age".into(),
                    op: ">".into(),
                    value: Value::Int(18),
                },
            }],
            order: vec![OrderTerm::Columns {
                columns: vec!["name".into()],
                direction: Direction::Asc,
            }],
            limit: Some(Limit {
                count: 10,
                offset: Some(5),
            }),
        };
        assert_eq!(
            mysql().compile_select(&stmt).unwrap(),
            "SELECT DISTINCT `id` FROM `users` WHERE `age` > 18 ORDER BY `name` ASC LIMIT 5, 10;"
        );
    }

    #[test]
    fn select_aggregate_item() {
        let stmt = SelectStmt {
            items: vec![
                SelectItem::Aggregate {
                    func: AggFunc::Count,
                    column: "*".into(),
                },
                SelectItem::Aggregate {
                    func: AggFunc::Max,
                    column: "price".into(),
                },
            ],
            from: Some(TableRef::Name("orders".into())),
            ..Default::default()
        };
        assert_eq!(
            mysql().compile_select(&stmt).unwrap(),
            "SELECT COUNT(*), MAX(`price`) FROM `orders`;"
        );
    }

    #[test]
    fn insert_requires_table_and_rows() {
        assert!(
            mysql()
                .compile_insert(&InsertStmt::default())
                .unwrap_err()
                .is_incomplete()
        );
        let no_rows = InsertStmt {
            table: Some(TableRef::Name("users".into())),
            ..Default::default()
        };
        assert!(mysql().compile_insert(&no_rows).unwrap_err().is_incomplete());
    }

    #[test]
    fn insert_renders_columns_and_rows() {
        let stmt = InsertStmt {
            table: Some(TableRef::Name("users".into())),
            columns: vec!["name".into(), "age".into()],
            rows: vec![
                vec![
                    Term::Value(Value::Text("alice".into())),
                    Term::Value(Value::Int(30)),
                ],
                vec![
                    Term::Value(Value::Text("bob".into())),
                    Term::Value(Value::Null),
                ],
            ],
        };
        assert_eq!(
            mysql().compile_insert(&stmt).unwrap(),
            "INSERT INTO `users` (`name`, `age`) VALUES ('alice', 30), ('bob', NULL);"
        );
    }

    #[test]
    fn update_requires_set_list() {
        let stmt = UpdateStmt {
            table: Some(TableRef::Name("users".into())),
            ..Default::default()
        };
        assert!(mysql().compile_update(&stmt).unwrap_err().is_incomplete());
    }

    #[test]
    fn update_renders_assignments_and_where() {
        let stmt = UpdateStmt {
            table: Some(TableRef::Name("users".into())),
            assignments: vec![Assignment {
                column: "status".into(),
                term: Term::Value(Value::Text("inactive".into())),
            }],
            conds: vec![Cond {
                conj: Conj::And,
                expr: CondExpr::Cmp {
                    column: "id".into(),
                    op: "=".into(),
                    value: Value::Int(7),
                },
            }],
        };
        assert_eq!(
            mysql().compile_update(&stmt).unwrap(),
            "UPDATE `users` SET `status` = 'inactive' WHERE `id` = 7;"
        );
    }

    #[test]
    fn delete_renders_where_delimiters() {
        let stmt = DeleteStmt {
            table: Some(TableRef::Name("users".into())),
            conds: vec![
                Cond {
                    conj: Conj::And,
                    expr: CondExpr::Cmp {
                        column: "id".into(),
                        op: "=".into(),
                        value: Value::Int(1),
                    },
                },
                Cond {
                    conj: Conj::Or,
                    expr: CondExpr::Raw("`age` IS NULL".into()),
                },
            ],
        };
        assert_eq!(
            mysql().compile_delete(&stmt).unwrap(),
            "DELETE FROM `users` WHERE `id` = 1 OR `age` IS NULL;"
        );
    }

    #[test]
    fn postgres_identifiers_and_limit() {
        let c = Compiler::new(Dialect::Postgres);
        let stmt = SelectStmt {
            items: vec![SelectItem::Column("id".into())],
            from: Some(TableRef::Name("users".into())),
            limit: Some(Limit {
                count: 3,
                offset: Some(6),
            }),
            ..Default::default()
        };
        assert_eq!(
            c.compile_select(&stmt).unwrap(),
            "SELECT \"id\" FROM \"users\" LIMIT 3 OFFSET 6;"
        );
    }
}
