//! Tagged scalar values.
//!
//! [`Value`] is the single value type flowing through the library: literals in
//! rendered SQL, bound parameters at execution time, and decoded cells in
//! fetched rows. The tag is explicit, so a numeric string and a numeric value
//! are never confused.

use bytes::BytesMut;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

/// A tagged SQL scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean, rendered as `TRUE`/`FALSE`
    Bool(bool),
    /// Signed integer, rendered verbatim
    Int(i64),
    /// Floating point number, rendered verbatim
    Float(f64),
    /// Character string, escaped and single-quoted when rendered
    Text(String),
    /// A placeholder token (`?` or `:name`), rendered verbatim and bound later
    Placeholder(String),
}

impl Value {
    /// Create a placeholder value from its token.
    ///
    /// The token is taken as-is; `?` and `:name` are the forms the connection
    /// adapter understands at bind time.
    pub fn placeholder(token: impl Into<String>) -> Self {
        Self::Placeholder(token.into())
    }

    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text content, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => b.to_sql(ty, out),
            Value::Int(i) => {
                // Narrow to the column's width when the server asks for it.
                if *ty == Type::INT2 {
                    (*i as i16).to_sql(ty, out)
                } else if *ty == Type::INT4 {
                    (*i as i32).to_sql(ty, out)
                } else {
                    i.to_sql(ty, out)
                }
            }
            Value::Float(f) => {
                if *ty == Type::FLOAT4 {
                    (*f as f32).to_sql(ty, out)
                } else {
                    f.to_sql(ty, out)
                }
            }
            Value::Text(s) => s.to_sql(ty, out),
            Value::Placeholder(token) => {
                Err(format!("placeholder token '{token}' cannot be bound as a value").into())
            }
        }
    }

    fn accepts(_ty: &Type) -> bool {
        // The variant tag, not the column type, decides how we encode.
        true
    }

    to_sql_checked!();
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Placeholder(token) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("placeholder", token)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scalars() {
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
    }

    #[test]
    fn from_option() {
        assert_eq!(Value::from(Some(1i64)), Value::Int(1));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn placeholder_constructor() {
        assert_eq!(
            Value::placeholder(":id"),
            Value::Placeholder(":id".to_string())
        );
    }

    #[test]
    fn serialize_to_json() {
        assert_eq!(
            serde_json::to_value(Value::Int(7)).unwrap(),
            serde_json::json!(7)
        );
        assert_eq!(
            serde_json::to_value(Value::Null).unwrap(),
            serde_json::Value::Null
        );
        assert_eq!(
            serde_json::to_value(Value::Text("x".into())).unwrap(),
            serde_json::json!("x")
        );
    }
}
