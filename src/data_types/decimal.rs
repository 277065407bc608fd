use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::{decode_error, unexpected};

/// Exact numerics, decoded as `Decimal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalType;

impl DataType for DecimalType {
    fn name(&self) -> &str {
        "decimal"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Numeric
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        let value = match raw {
            SqlValue::Decimal(v) => *v,
            SqlValue::Int16(v) => Decimal::from(*v),
            SqlValue::Int32(v) => Decimal::from(*v),
            SqlValue::Int64(v) => Decimal::from(*v),
            SqlValue::Text(s) => Decimal::from_str(s.trim())
                .map_err(|e| decode_error(sql_type, format!("{:?}: {}", s, e)))?,
            other => return Err(unexpected(sql_type, other)),
        };
        Ok(SqlValue::Decimal(value))
    }
}
