//! Migration-style DDL builder.
//!
//! Renders `CREATE/DROP TABLE` and `CREATE/DROP DATABASE` statements with the
//! same flat keyword assembly and quoting rules as the query compiler. Column
//! definitions cover data type, nullability, default, auto-increment, and
//! comment; table-level constraints cover `PRIMARY KEY`, `UNIQUE`, and
//! `CHECK`. No validation against actual server capabilities is performed.
//!
//! Like [`crate::Query`], switching the statement kind resets every clause,
//! and rendering a statement with a missing mandatory part (table name, empty
//! column list, a column without a data type) is [`DbError::Incomplete`].

use crate::ast::Term;
use crate::compile::Compiler;
use crate::error::{DbError, DbResult};
use crate::quote::Dialect;
use crate::value::Value;

#[derive(Debug, Clone)]
enum SchemaStmt {
    CreateTable {
        table: String,
        raw_table: bool,
        if_not_exists: bool,
        columns: Vec<ColumnSpec>,
        primary_key: Option<KeySpec>,
        uniques: Vec<Vec<String>>,
        checks: Vec<String>,
    },
    DropTable {
        table: String,
        raw_table: bool,
        if_exists: bool,
    },
    CreateDatabase {
        name: String,
        if_not_exists: bool,
        charset: Option<String>,
        collation: Option<String>,
    },
    DropDatabase {
        name: String,
        if_exists: bool,
    },
}

#[derive(Debug, Clone)]
enum KeySpec {
    Columns(Vec<String>),
    Raw(String),
}

#[derive(Debug, Clone)]
enum ColumnSpec {
    Def(ColumnDef),
    /// A pre-formed column definition fragment, inserted verbatim.
    Raw(String),
}

#[derive(Debug, Clone)]
struct ColumnDef {
    name: String,
    data_type: Option<String>,
    /// `None` = unspecified, `Some(true)` = NULL, `Some(false)` = NOT NULL.
    nullable: Option<bool>,
    default: Option<Term>,
    auto_increment: bool,
    comment: Option<String>,
}

impl ColumnDef {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: None,
            nullable: None,
            default: None,
            auto_increment: false,
            comment: None,
        }
    }
}

/// Fluent builder for schema statements.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    compiler: Compiler,
    statement: Option<SchemaStmt>,
    build_error: Option<String>,
}

impl Schema {
    /// Create a builder for the default dialect (MySQL).
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

    // ==================== Statement kind switches ====================

    /// Start a `CREATE TABLE` statement. Resets all clauses.
    pub fn create_table(mut self, table: &str) -> Self {
        self.reset(SchemaStmt::CreateTable {
            table: table.to_string(),
            raw_table: false,
            if_not_exists: false,
            columns: Vec::new(),
            primary_key: None,
            uniques: Vec::new(),
            checks: Vec::new(),
        });
        self
    }

    /// Start a `CREATE TABLE` statement with a raw table fragment.
    pub fn create_table_raw(mut self, expr: &str) -> Self {
        self.reset(SchemaStmt::CreateTable {
            table: expr.to_string(),
            raw_table: true,
            if_not_exists: false,
            columns: Vec::new(),
            primary_key: None,
            uniques: Vec::new(),
            checks: Vec::new(),
        });
        self
    }

    /// Start a `DROP TABLE` statement. Resets all clauses.
    pub fn drop_table(mut self, table: &str) -> Self {
        self.reset(SchemaStmt::DropTable {
            table: table.to_string(),
            raw_table: false,
            if_exists: false,
        });
        self
    }

    /// Start a `DROP TABLE` statement with a raw table fragment.
    pub fn drop_table_raw(mut self, expr: &str) -> Self {
        self.reset(SchemaStmt::DropTable {
            table: expr.to_string(),
            raw_table: true,
            if_exists: false,
        });
        self
    }

    /// Start a `CREATE DATABASE` statement. Resets all clauses.
    pub fn create_database(mut self, name: &str) -> Self {
        self.reset(SchemaStmt::CreateDatabase {
            name: name.to_string(),
            if_not_exists: false,
            charset: None,
            collation: None,
        });
        self
    }

    /// Start a `DROP DATABASE` statement. Resets all clauses.
    pub fn drop_database(mut self, name: &str) -> Self {
        self.reset(SchemaStmt::DropDatabase {
            name: name.to_string(),
            if_exists: false,
        });
        self
    }

    fn reset(&mut self, statement: SchemaStmt) {
        self.statement = Some(statement);
        self.build_error = None;
    }

    // ==================== Modifiers ====================

    /// Add `IF EXISTS` to a DROP statement.
    pub fn if_exists(mut self) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::DropTable { if_exists, .. })
            | Some(SchemaStmt::DropDatabase { if_exists, .. }) => *if_exists = true,
            _ => self.record_error("IF EXISTS is only valid for DROP statements"),
        }
        self
    }

    /// Add `IF NOT EXISTS` to a CREATE statement.
    pub fn if_not_exists(mut self) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { if_not_exists, .. })
            | Some(SchemaStmt::CreateDatabase { if_not_exists, .. }) => *if_not_exists = true,
            _ => self.record_error("IF NOT EXISTS is only valid for CREATE statements"),
        }
        self
    }

    /// Set the database character set (`CREATE DATABASE` only).
    pub fn charset(mut self, charset: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateDatabase { charset: c, .. }) => *c = Some(charset.to_string()),
            _ => self.record_error("CHARACTER SET is only valid for CREATE DATABASE"),
        }
        self
    }

    /// Set the database collation (`CREATE DATABASE` only).
    pub fn collation(mut self, collation: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateDatabase { collation: c, .. }) => {
                *c = Some(collation.to_string())
            }
            _ => self.record_error("COLLATE is only valid for CREATE DATABASE"),
        }
        self
    }

    // ==================== Columns ====================

    /// Add a column to the table being created. The data type is set by a
    /// chained type method (`int`, `varchar`, ...).
    pub fn column(mut self, name: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { columns, .. }) => {
                columns.push(ColumnSpec::Def(ColumnDef::new(name)));
            }
            _ => self.record_error("columns are only valid for CREATE TABLE"),
        }
        self
    }

    /// Add a pre-formed column definition fragment, inserted verbatim.
    pub fn column_raw(mut self, expr: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { columns, .. }) => {
                columns.push(ColumnSpec::Raw(expr.to_string()));
            }
            _ => self.record_error("columns are only valid for CREATE TABLE"),
        }
        self
    }

    fn last_column(&mut self) -> Option<&mut ColumnDef> {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { columns, .. }) => match columns.last_mut() {
                Some(ColumnSpec::Def(def)) => Some(def),
                _ => None,
            },
            _ => None,
        }
    }

    fn set_data_type(mut self, data_type: String) -> Self {
        match self.last_column() {
            Some(def) => def.data_type = Some(data_type),
            None => self.record_error("data type requires a preceding column() call"),
        }
        self
    }

    fn integer_type(name: &str, size: Option<u32>, unsigned: bool) -> String {
        let mut ty = name.to_string();
        if let Some(size) = size {
            ty.push_str(&format!("({size})"));
        }
        if unsigned {
            ty.push_str(" UNSIGNED");
        }
        ty
    }

    fn float_type(name: &str, size: Option<u32>, digits: Option<u32>) -> String {
        match (size, digits) {
            (None, _) => name.to_string(),
            (Some(size), None) => format!("{name}({size})"),
            (Some(size), Some(digits)) => format!("{name}({size}, {digits})"),
        }
    }

    fn enumeration_type(&self, name: &str, values: &[Value]) -> String {
        let values = values
            .iter()
            .map(|v| self.compiler.dialect.quote_literal(v))
            .collect::<Vec<_>>();
        format!("{name}({})", values.join(", "))
    }

    /// `INT[(size)][ UNSIGNED]`
    pub fn int(self, size: impl Into<Option<u32>>, unsigned: bool) -> Self {
        let ty = Self::integer_type("INT", size.into(), unsigned);
        self.set_data_type(ty)
    }

    /// `BIGINT[(size)][ UNSIGNED]`
    pub fn big_int(self, size: impl Into<Option<u32>>, unsigned: bool) -> Self {
        let ty = Self::integer_type("BIGINT", size.into(), unsigned);
        self.set_data_type(ty)
    }

    /// `TINYINT[(size)][ UNSIGNED]`
    pub fn tiny_int(self, size: impl Into<Option<u32>>, unsigned: bool) -> Self {
        let ty = Self::integer_type("TINYINT", size.into(), unsigned);
        self.set_data_type(ty)
    }

    /// `SMALLINT[(size)][ UNSIGNED]`
    pub fn small_int(self, size: impl Into<Option<u32>>, unsigned: bool) -> Self {
        let ty = Self::integer_type("SMALLINT", size.into(), unsigned);
        self.set_data_type(ty)
    }

    /// `MEDIUMINT[(size)][ UNSIGNED]`
    pub fn medium_int(self, size: impl Into<Option<u32>>, unsigned: bool) -> Self {
        let ty = Self::integer_type("MEDIUMINT", size.into(), unsigned);
        self.set_data_type(ty)
    }

    /// `FLOAT[(size[, digits])]`
    pub fn float(self, size: impl Into<Option<u32>>, digits: impl Into<Option<u32>>) -> Self {
        let ty = Self::float_type("FLOAT", size.into(), digits.into());
        self.set_data_type(ty)
    }

    /// `DOUBLE[(size[, digits])]`
    pub fn double(self, size: impl Into<Option<u32>>, digits: impl Into<Option<u32>>) -> Self {
        let ty = Self::float_type("DOUBLE", size.into(), digits.into());
        self.set_data_type(ty)
    }

    /// `DECIMAL[(size[, digits])]`
    pub fn decimal(self, size: impl Into<Option<u32>>, digits: impl Into<Option<u32>>) -> Self {
        let ty = Self::float_type("DECIMAL", size.into(), digits.into());
        self.set_data_type(ty)
    }

    /// `CHAR(size)`
    pub fn char(self, size: u32) -> Self {
        self.set_data_type(format!("CHAR({size})"))
    }

    /// `VARCHAR(size)`
    pub fn varchar(self, size: u32) -> Self {
        self.set_data_type(format!("VARCHAR({size})"))
    }

    /// `TEXT`
    pub fn text(self) -> Self {
        self.set_data_type("TEXT".to_string())
    }

    /// `TINYTEXT`
    pub fn tiny_text(self) -> Self {
        self.set_data_type("TINYTEXT".to_string())
    }

    /// `MEDIUMTEXT`
    pub fn medium_text(self) -> Self {
        self.set_data_type("MEDIUMTEXT".to_string())
    }

    /// `LONGTEXT`
    pub fn long_text(self) -> Self {
        self.set_data_type("LONGTEXT".to_string())
    }

    /// `BLOB`
    pub fn blob(self) -> Self {
        self.set_data_type("BLOB".to_string())
    }

    /// `MEDIUMBLOB`
    pub fn medium_blob(self) -> Self {
        self.set_data_type("MEDIUMBLOB".to_string())
    }

    /// `LONGBLOB`
    pub fn long_blob(self) -> Self {
        self.set_data_type("LONGBLOB".to_string())
    }

    /// `ENUM(v1, v2, ...)` with each value rendered as a literal.
    pub fn enumeration(self, values: &[Value]) -> Self {
        let ty = self.enumeration_type("ENUM", values);
        self.set_data_type(ty)
    }

    /// `SET(v1, v2, ...)` with each value rendered as a literal.
    pub fn set_of(self, values: &[Value]) -> Self {
        let ty = self.enumeration_type("SET", values);
        self.set_data_type(ty)
    }

    /// `TIME`
    pub fn time(self) -> Self {
        self.set_data_type("TIME".to_string())
    }

    /// `YEAR`
    pub fn year(self) -> Self {
        self.set_data_type("YEAR".to_string())
    }

    /// `DATE`
    pub fn date(self) -> Self {
        self.set_data_type("DATE".to_string())
    }

    /// `DATETIME`
    pub fn datetime(self) -> Self {
        self.set_data_type("DATETIME".to_string())
    }

    /// `TIMESTAMP`
    pub fn timestamp(self) -> Self {
        self.set_data_type("TIMESTAMP".to_string())
    }

    /// Mark the last column `NULL`.
    pub fn null(mut self) -> Self {
        match self.last_column() {
            Some(def) => def.nullable = Some(true),
            None => self.record_error("NULL requires a preceding column() call"),
        }
        self
    }

    /// Mark the last column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        match self.last_column() {
            Some(def) => def.nullable = Some(false),
            None => self.record_error("NOT NULL requires a preceding column() call"),
        }
        self
    }

    /// Set the last column's `DEFAULT` to a literal value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.last_column() {
            Some(def) => def.default = Some(Term::Value(value)),
            None => self.record_error("DEFAULT requires a preceding column() call"),
        }
        self
    }

    /// Set the last column's `DEFAULT` to a raw fragment.
    pub fn default_raw(mut self, expr: &str) -> Self {
        match self.last_column() {
            Some(def) => def.default = Some(Term::Raw(expr.to_string())),
            None => self.record_error("DEFAULT requires a preceding column() call"),
        }
        self
    }

    /// Mark the last column `AUTO_INCREMENT`.
    pub fn auto_increment(mut self) -> Self {
        match self.last_column() {
            Some(def) => def.auto_increment = true,
            None => self.record_error("AUTO_INCREMENT requires a preceding column() call"),
        }
        self
    }

    /// Set the last column's `COMMENT`.
    pub fn comment(mut self, text: &str) -> Self {
        match self.last_column() {
            Some(def) => def.comment = Some(text.to_string()),
            None => self.record_error("COMMENT requires a preceding column() call"),
        }
        self
    }

    // ==================== Table constraints ====================

    /// Set the table's `PRIMARY KEY` column list.
    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { primary_key, .. }) => {
                *primary_key = Some(KeySpec::Columns(
                    columns.iter().map(|c| c.to_string()).collect(),
                ));
            }
            _ => self.record_error("PRIMARY KEY is only valid for CREATE TABLE"),
        }
        self
    }

    /// Set the table's `PRIMARY KEY` from a raw fragment.
    pub fn primary_key_raw(mut self, expr: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { primary_key, .. }) => {
                *primary_key = Some(KeySpec::Raw(expr.to_string()));
            }
            _ => self.record_error("PRIMARY KEY is only valid for CREATE TABLE"),
        }
        self
    }

    /// Add a `UNIQUE` constraint over the given columns.
    pub fn unique(mut self, columns: &[&str]) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { uniques, .. }) => {
                uniques.push(columns.iter().map(|c| c.to_string()).collect());
            }
            _ => self.record_error("UNIQUE is only valid for CREATE TABLE"),
        }
        self
    }

    /// Add a `CHECK` constraint. The expression is inserted verbatim.
    pub fn check(mut self, expr: &str) -> Self {
        match &mut self.statement {
            Some(SchemaStmt::CreateTable { checks, .. }) => checks.push(expr.to_string()),
            _ => self.record_error("CHECK is only valid for CREATE TABLE"),
        }
        self
    }

    // ==================== Rendering ====================

    /// Render the accumulated schema statement as SQL.
    pub fn to_sql(&self) -> DbResult<String> {
        if let Some(message) = &self.build_error {
            return Err(DbError::InvalidArgument(message.clone()));
        }
        let Some(statement) = &self.statement else {
            return Err(DbError::incomplete("no schema statement was started"));
        };
        match statement {
            SchemaStmt::CreateTable {
                table,
                raw_table,
                if_not_exists,
                columns,
                primary_key,
                uniques,
                checks,
            } => self.render_create_table(
                table,
                *raw_table,
                *if_not_exists,
                columns,
                primary_key.as_ref(),
                uniques,
                checks,
            ),
            SchemaStmt::DropTable {
                table,
                raw_table,
                if_exists,
            } => {
                let mut sql = String::from(if *if_exists {
                    "DROP TABLE IF EXISTS "
                } else {
                    "DROP TABLE "
                });
                sql.push_str(&self.table_name(table, *raw_table));
                sql.push(';');
                Ok(sql)
            }
            SchemaStmt::CreateDatabase {
                name,
                if_not_exists,
                charset,
                collation,
            } => {
                let mut sql = String::from(if *if_not_exists {
                    "CREATE DATABASE IF NOT EXISTS "
                } else {
                    "CREATE DATABASE "
                });
                sql.push_str(&self.compiler.dialect.quote_identifier(name));
                if let Some(charset) = charset {
                    sql.push_str(" CHARACTER SET ");
                    sql.push_str(charset);
                }
                if let Some(collation) = collation {
                    sql.push_str(" COLLATE ");
                    sql.push_str(collation);
                }
                sql.push(';');
                Ok(sql)
            }
            SchemaStmt::DropDatabase { name, if_exists } => {
                let mut sql = String::from(if *if_exists {
                    "DROP DATABASE IF EXISTS "
                } else {
                    "DROP DATABASE "
                });
                sql.push_str(&self.compiler.dialect.quote_identifier(name));
                sql.push(';');
                Ok(sql)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_create_table(
        &self,
        table: &str,
        raw_table: bool,
        if_not_exists: bool,
        columns: &[ColumnSpec],
        primary_key: Option<&KeySpec>,
        uniques: &[Vec<String>],
        checks: &[String],
    ) -> DbResult<String> {
        if columns.is_empty() {
            return Err(DbError::incomplete("CREATE TABLE statement has no columns"));
        }

        let mut sql = String::from(if if_not_exists {
            "CREATE TABLE IF NOT EXISTS "
        } else {
            "CREATE TABLE "
        });
        sql.push_str(&self.table_name(table, raw_table));

        let mut defs = Vec::new();
        for column in columns {
            match column {
                ColumnSpec::Raw(raw) => defs.push(raw.clone()),
                ColumnSpec::Def(def) => defs.push(self.render_column(def)?),
            }
        }

        if let Some(key) = primary_key {
            let cols = match key {
                KeySpec::Columns(cols) => cols
                    .iter()
                    .map(|c| self.compiler.compile_name(c))
                    .collect::<Vec<_>>()
                    .join(", "),
                KeySpec::Raw(raw) => raw.clone(),
            };
            defs.push(format!("PRIMARY KEY ({cols})"));
        }
        for unique in uniques {
            let cols = unique
                .iter()
                .map(|c| self.compiler.compile_name(c))
                .collect::<Vec<_>>()
                .join(", ");
            defs.push(format!("UNIQUE ({cols})"));
        }
        for check in checks {
            defs.push(format!("CHECK ({check})"));
        }

        sql.push_str(" (");
        sql.push_str(&defs.join(", "));
        sql.push_str(");");
        Ok(sql)
    }

    fn render_column(&self, def: &ColumnDef) -> DbResult<String> {
        let Some(data_type) = &def.data_type else {
            return Err(DbError::incomplete(format!(
                "column '{}' has no data type",
                def.name
            )));
        };

        let mut out = self.compiler.compile_name(&def.name);
        out.push(' ');
        out.push_str(data_type);

        match def.nullable {
            Some(true) => out.push_str(" NULL"),
            Some(false) => out.push_str(" NOT NULL"),
            None => {}
        }
        if let Some(default) = &def.default {
            out.push_str(" DEFAULT ");
            out.push_str(&self.compiler.term(default));
        }
        if def.auto_increment {
            out.push_str(" AUTO_INCREMENT");
        }
        if let Some(comment) = &def.comment {
            out.push_str(" COMMENT ");
            out.push_str(&self.compiler.dialect.quote_string(comment));
        }
        Ok(out)
    }

    fn table_name(&self, table: &str, raw: bool) -> String {
        if raw {
            table.to_string()
        } else {
            self.compiler.compile_name(table)
        }
    }

    fn record_error(&mut self, message: impl Into<String>) {
        if self.build_error.is_none() {
            self.build_error = Some(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_table() {
        let sql = Schema::new().drop_table("users").to_sql().unwrap();
        assert_eq!(sql, "DROP TABLE `users`;");
    }

    #[test]
    fn drop_table_if_exists() {
        let sql = Schema::new()
            .drop_table("users")
            .if_exists()
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DROP TABLE IF EXISTS `users`;");
    }

    #[test]
    fn create_table_full() {
        let sql = Schema::new()
            .create_table("users")
            .if_not_exists()
            .column("id")
            .int(11, true)
            .not_null()
            .auto_increment()
            .column("name")
            .varchar(255)
            .not_null()
            .comment("display name")
            .column("age")
            .int(None, false)
            .null()
            .default_value(Value::Null)
            .primary_key(&["id"])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS `users` (\
             `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT, \
             `name` VARCHAR(255) NOT NULL COMMENT 'display name', \
             `age` INT NULL DEFAULT NULL, \
             PRIMARY KEY (`id`));"
        );
    }

    #[test]
    fn create_table_with_unique_and_check() {
        let sql = Schema::new()
            .create_table("accounts")
            .column("email")
            .varchar(128)
            .not_null()
            .column("balance")
            .decimal(10, 2)
            .unique(&["email"])
            .check("`balance` >= 0")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE `accounts` (\
             `email` VARCHAR(128) NOT NULL, \
             `balance` DECIMAL(10, 2), \
             UNIQUE (`email`), \
             CHECK (`balance` >= 0));"
        );
    }

    #[test]
    fn create_table_enumeration_column() {
        let sql = Schema::new()
            .create_table("tickets")
            .column("state")
            .enumeration(&[Value::Text("open".into()), Value::Text("closed".into())])
            .not_null()
            .default_value("open")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE `tickets` (`state` ENUM('open', 'closed') NOT NULL DEFAULT 'open');"
        );
    }

    #[test]
    fn create_table_requires_columns() {
        let err = Schema::new().create_table("users").to_sql().unwrap_err();
        assert!(err.is_incomplete());
    }

    #[test]
    fn column_without_data_type_is_incomplete() {
        let err = Schema::new()
            .create_table("users")
            .column("id")
            .to_sql()
            .unwrap_err();
        assert!(err.is_incomplete());
    }

    #[test]
    fn column_raw_is_inserted_verbatim() {
        let sql = Schema::new()
            .create_table("t")
            .column_raw("id SERIAL PRIMARY KEY")
            .to_sql()
            .unwrap();
        assert_eq!(sql, "CREATE TABLE `t` (id SERIAL PRIMARY KEY);");
    }

    #[test]
    fn create_database_with_charset_and_collation() {
        let sql = Schema::new()
            .create_database("app")
            .if_not_exists()
            .charset("utf8mb4")
            .collation("utf8mb4_unicode_ci")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE DATABASE IF NOT EXISTS `app` CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;"
        );
    }

    #[test]
    fn drop_database() {
        let sql = Schema::new()
            .drop_database("app")
            .if_exists()
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DROP DATABASE IF EXISTS `app`;");
    }

    #[test]
    fn kind_switch_resets_clauses() {
        let sql = Schema::new()
            .create_table("users")
            .column("id")
            .int(None, false)
            .drop_table("users")
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DROP TABLE `users`;");
    }

    #[test]
    fn type_method_without_column_is_an_error() {
        let err = Schema::new()
            .create_table("users")
            .not_null()
            .to_sql()
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidArgument(_)));
    }

    #[test]
    fn empty_builder_is_incomplete() {
        assert!(Schema::new().to_sql().unwrap_err().is_incomplete());
    }

    #[test]
    fn modifier_on_wrong_kind_is_an_error() {
        let err = Schema::new()
            .create_table("users")
            .column("id")
            .int(None, false)
            .if_exists()
            .to_sql()
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidArgument(_)));
    }
}
