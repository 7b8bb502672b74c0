//! Result rows.
//!
//! A [`Record`] is an ordered list of `(column name, value)` pairs decoded
//! from a driver row. Decoding is by declared column type; an unsupported
//! type or a driver-side conversion failure surfaces as [`DbError::Fetch`]
//! naming the offending column.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tokio_postgres::Row;
use tokio_postgres::types::Type;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::value::Value;

/// One decoded result row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Look up a value by column name. First match wins when a query yields
    /// duplicate column names.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(col, value)| (col.as_str(), value))
    }

    /// Serialize the record as a JSON object, in column order.
    pub fn to_json(&self) -> DbResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| DbError::fetch("<record>", e.to_string()))
    }

    /// Decode a driver row, converting each column by its declared type.
    pub fn from_pg_row(row: &Row) -> DbResult<Self> {
        let mut columns = Vec::with_capacity(row.len());
        for (idx, column) in row.columns().iter().enumerate() {
            let name = column.name().to_string();
            let value = decode_column(row, idx, column.type_())
                .map_err(|message| DbError::fetch(&name, message))?;
            columns.push((name, value));
        }
        Ok(Self { columns })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (col, value) in &self.columns {
            map.serialize_entry(col, value)?;
        }
        map.end()
    }
}

fn decode_column(row: &Row, idx: usize, ty: &Type) -> Result<Value, String> {
    fn take<'a, T>(row: &'a Row, idx: usize) -> Result<Option<T>, String>
    where
        T: tokio_postgres::types::FromSql<'a>,
    {
        row.try_get::<_, Option<T>>(idx).map_err(|e| e.to_string())
    }

    let value = if *ty == Type::BOOL {
        take::<bool>(row, idx)?.map(Value::Bool)
    } else if *ty == Type::INT2 {
        take::<i16>(row, idx)?.map(|v| Value::Int(v.into()))
    } else if *ty == Type::INT4 {
        take::<i32>(row, idx)?.map(|v| Value::Int(v.into()))
    } else if *ty == Type::INT8 {
        take::<i64>(row, idx)?.map(Value::Int)
    } else if *ty == Type::FLOAT4 {
        take::<f32>(row, idx)?.map(|v| Value::Float(v.into()))
    } else if *ty == Type::FLOAT8 {
        take::<f64>(row, idx)?.map(Value::Float)
    } else if *ty == Type::TIMESTAMP {
        take::<NaiveDateTime>(row, idx)?.map(|v| Value::Text(v.to_string()))
    } else if *ty == Type::TIMESTAMPTZ {
        take::<DateTime<Utc>>(row, idx)?.map(|v| Value::Text(v.to_rfc3339()))
    } else if *ty == Type::DATE {
        take::<NaiveDate>(row, idx)?.map(|v| Value::Text(v.to_string()))
    } else if *ty == Type::TIME {
        take::<NaiveTime>(row, idx)?.map(|v| Value::Text(v.to_string()))
    } else if *ty == Type::UUID {
        take::<Uuid>(row, idx)?.map(|v| Value::Text(v.to_string()))
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        take::<serde_json::Value>(row, idx)?.map(|v| Value::Text(v.to_string()))
    } else if *ty == Type::TEXT
        || *ty == Type::VARCHAR
        || *ty == Type::BPCHAR
        || *ty == Type::NAME
    {
        take::<String>(row, idx)?.map(Value::Text)
    } else {
        // Last resort for textual-ish types the list above misses.
        match take::<String>(row, idx) {
            Ok(v) => v.map(Value::Text),
            Err(_) => return Err(format!("unsupported column type '{ty}'")),
        }
    };
    Ok(value.unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(vec![
            ("id".to_string(), Value::Int(7)),
            ("name".to_string(), Value::Text("ada".to_string())),
            ("vip".to_string(), Value::Bool(true)),
            ("deleted_at".to_string(), Value::Null),
        ])
    }

    #[test]
    fn get_by_name() {
        let record = sample();
        assert_eq!(record.get("id"), Some(&Value::Int(7)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn iteration_preserves_column_order() {
        let record = sample();
        let names: Vec<&str> = record.iter().map(|(col, _)| col).collect();
        assert_eq!(names, vec!["id", "name", "vip", "deleted_at"]);
    }

    #[test]
    fn to_json_keeps_tags() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "ada",
                "vip": true,
                "deleted_at": null,
            })
        );
    }

    #[test]
    fn duplicate_column_names_first_wins() {
        let record = Record::new(vec![
            ("n".to_string(), Value::Int(1)),
            ("n".to_string(), Value::Int(2)),
        ]);
        assert_eq!(record.get("n"), Some(&Value::Int(1)));
    }
}
