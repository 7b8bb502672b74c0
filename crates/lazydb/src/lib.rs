//! Lightweight SQL building and execution.
//!
//! `lazydb` renders SQL statements from fluent builders and runs them over an
//! async Postgres connection. Rendering is pure string assembly over a typed
//! clause model, so builders are usable without any database at all.
//!
//! # Quick start
//!
//! ```
//! use lazydb::Query;
//!
//! let sql = Query::new()
//!     .select(&["id", "name"])
//!     .from("users")
//!     .where_("age", ">", 18)
//!     .order_by_desc(&["id"])
//!     .limit(10)
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT `id`, `name` FROM `users` WHERE `age` > 18 ORDER BY `id` DESC LIMIT 10;"
//! );
//! ```
//!
//! Schema statements use the same pattern:
//!
//! ```
//! use lazydb::Schema;
//!
//! let sql = Schema::new()
//!     .create_table("users")
//!     .column("id")
//!     .int(11, true)
//!     .not_null()
//!     .auto_increment()
//!     .column("name")
//!     .varchar(255)
//!     .not_null()
//!     .primary_key(&["id"])
//!     .to_sql()
//!     .unwrap();
//! assert!(sql.starts_with("CREATE TABLE `users`"));
//! ```
//!
//! Execution goes through [`Connection`]: `query` for parameterless
//! statements, `prepare` + `execute` for bound ones, then `fetch_all`,
//! `fetch_first`, or `fetch_last` to read the buffered result set.

pub mod ast;
pub mod builder;
pub mod compile;
pub mod conn;
pub mod error;
pub mod quote;
pub mod row;
pub mod schema;
pub mod value;

pub use builder::Query;
pub use compile::Compiler;
pub use conn::{Connection, ConnectionConfig, Params};
pub use error::{DbError, DbResult};
pub use quote::Dialect;
pub use row::Record;
pub use schema::Schema;
pub use value::Value;
