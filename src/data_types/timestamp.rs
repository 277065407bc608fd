use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::{decode_error, unexpected};

/// Timestamps without time zone. Textual cells use `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampType;

impl DataType for TimestampType {
    fn name(&self) -> &str {
        "timestamp"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::Timestamp
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        match raw {
            SqlValue::Timestamp(v) => Ok(SqlValue::Timestamp(*v)),
            SqlValue::Text(s) => {
                let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
                PrimitiveDateTime::parse(s.trim(), &format)
                    .map(SqlValue::Timestamp)
                    .map_err(|e| decode_error(sql_type, format!("{:?}: {}", s, e)))
            }
            other => Err(unexpected(sql_type, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_decode_text() {
        assert_eq!(
            TimestampType
                .decode(
                    SqlType::Timestamp,
                    &SqlValue::Text("2018-03-01 12:30:05".to_string())
                )
                .unwrap(),
            SqlValue::Timestamp(datetime!(2018-03-01 12:30:05))
        );
        assert!(TimestampType
            .decode(SqlType::Timestamp, &SqlValue::Text("yesterday".to_string()))
            .is_err());
    }
}
