use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::{decode_error, unexpected};

/// Booleans. Textual cells accept the PostgreSQL spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolType;

impl DataType for BoolType {
    fn name(&self) -> &str {
        "bool"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Boolean
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        match raw {
            SqlValue::Bool(v) => Ok(SqlValue::Bool(*v)),
            SqlValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "t" | "true" | "y" | "yes" | "on" | "1" => Ok(SqlValue::Bool(true)),
                "f" | "false" | "n" | "no" | "off" | "0" => Ok(SqlValue::Bool(false)),
                _ => Err(decode_error(sql_type, format!("{:?} is not a boolean", s))),
            },
            other => Err(unexpected(sql_type, other)),
        }
    }
}
