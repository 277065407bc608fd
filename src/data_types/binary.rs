use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::unexpected;

/// Binary columns read as raw bytes.
///
/// Overlaps with [`UuidType`](super::UuidType) on `Binary`; whichever is
/// registered first decides how binary columns are read.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesType;

impl DataType for BytesType {
    fn name(&self) -> &str {
        "bytes"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Binary
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        match raw {
            SqlValue::Bytes(b) => Ok(SqlValue::Bytes(b.clone())),
            other => Err(unexpected(sql_type, other)),
        }
    }
}
