//! Identifier and literal quoting.
//!
//! Everything here is dialect-parameterized: the quote character for
//! identifiers, the escape style inside quoted text, and the positional LIMIT
//! syntax differ between the two supported dialects. [`Dialect::MySql`] is the
//! default.
//!
//! Quoting accepts any input string and echoes it back quoted; no length or
//! character-set validation is performed. The literal wildcard `*` is the one
//! identifier that passes through unquoted.

use crate::value::Value;

/// The SQL dialect a statement is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Backtick identifiers, backslash-escaped strings, `LIMIT offset, count`.
    #[default]
    MySql,
    /// Double-quoted identifiers (escaped by doubling), doubled single quotes
    /// in strings, `LIMIT count OFFSET offset`.
    Postgres,
}

impl Dialect {
    /// Quote a single identifier segment.
    ///
    /// `*` is returned unchanged; any other string has embedded quote
    /// characters escaped and is wrapped in the dialect's quote character.
    pub fn quote_identifier(&self, name: &str) -> String {
        if name == "*" {
            return name.to_string();
        }
        match self {
            Dialect::MySql => format!("`{}`", name.replace('`', "\\`")),
            Dialect::Postgres => format!("\"{}\"", name.replace('"', "\"\"")),
        }
    }

    /// Escape and single-quote a character string.
    pub fn quote_string(&self, s: &str) -> String {
        match self {
            Dialect::MySql => format!("'{}'", s.replace('\'', "\\'")),
            Dialect::Postgres => format!("'{}'", s.replace('\'', "''")),
        }
    }

    /// Render a [`Value`] as an SQL literal.
    ///
    /// Numbers render via `Display`, unescaped and untyped; a text value equal
    /// to `?` or starting with `:` is treated as a placeholder token and
    /// returned verbatim, so literal rendering and parameter binding coexist.
    pub fn quote_literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(true) => "TRUE".to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Placeholder(token) => token.clone(),
            Value::Text(s) => {
                if s == "?" || s.starts_with(':') {
                    s.clone()
                } else {
                    self.quote_string(s)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_passes_through() {
        assert_eq!(Dialect::MySql.quote_identifier("*"), "*");
        assert_eq!(Dialect::Postgres.quote_identifier("*"), "*");
    }

    #[test]
    fn mysql_identifier_backticked() {
        assert_eq!(Dialect::MySql.quote_identifier("users"), "`users`");
    }

    #[test]
    fn mysql_identifier_escapes_backtick() {
        assert_eq!(Dialect::MySql.quote_identifier("we`ird"), "`we\\`ird`");
    }

    #[test]
    fn postgres_identifier_doubles_quote() {
        assert_eq!(
            Dialect::Postgres.quote_identifier("Camel\"Case"),
            "\"Camel\"\"Case\""
        );
    }

    #[test]
    fn literal_null_and_bools() {
        let d = Dialect::MySql;
        assert_eq!(d.quote_literal(&Value::Null), "NULL");
        assert_eq!(d.quote_literal(&Value::Bool(true)), "TRUE");
        assert_eq!(d.quote_literal(&Value::Bool(false)), "FALSE");
    }

    #[test]
    fn literal_numbers_render_verbatim() {
        let d = Dialect::MySql;
        assert_eq!(d.quote_literal(&Value::Int(42)), "42");
        assert_eq!(d.quote_literal(&Value::Float(3.5)), "3.5");
    }

    #[test]
    fn literal_placeholder_tokens_pass_through() {
        let d = Dialect::MySql;
        assert_eq!(d.quote_literal(&Value::Text("?".into())), "?");
        assert_eq!(d.quote_literal(&Value::Text(":name".into())), ":name");
        assert_eq!(d.quote_literal(&Value::placeholder("?")), "?");
    }

    #[test]
    fn literal_string_escaped_mysql() {
        assert_eq!(
            Dialect::MySql.quote_literal(&Value::Text("it's".into())),
            "'it\\'s'"
        );
    }

    #[test]
    fn literal_string_escaped_postgres() {
        assert_eq!(
            Dialect::Postgres.quote_literal(&Value::Text("it's".into())),
            "'it''s'"
        );
    }
}
