use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::unexpected;

/// Character data, decoded as `Text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextType;

impl DataType for TextType {
    fn name(&self) -> &str {
        "text"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Text
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        match raw {
            SqlValue::Text(s) => Ok(SqlValue::Text(s.clone())),
            other => Err(unexpected(sql_type, other)),
        }
    }
}
