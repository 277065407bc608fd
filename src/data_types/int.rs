use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::{decode_error, unexpected};

/// Small, medium and standard integers, decoded as `Int32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntType;

impl DataType for IntType {
    fn name(&self) -> &str {
        "int"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        matches!(
            sql_type,
            SqlType::TinyInt | SqlType::SmallInt | SqlType::Integer
        )
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        let value = match raw {
            SqlValue::Int16(v) => i32::from(*v),
            SqlValue::Int32(v) => *v,
            SqlValue::Int64(v) => i32::try_from(*v)
                .map_err(|_| decode_error(sql_type, format!("{} overflows int32", v)))?,
            SqlValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| decode_error(sql_type, format!("{:?}: {}", s, e)))?,
            other => return Err(unexpected(sql_type, other)),
        };
        Ok(SqlValue::Int32(value))
    }
}

/// 64-bit integers, decoded as `Int64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntType;

impl DataType for BigIntType {
    fn name(&self) -> &str {
        "bigint"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        sql_type == SqlType::BigInt
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        let value = match raw {
            SqlValue::Int16(v) => i64::from(*v),
            SqlValue::Int32(v) => i64::from(*v),
            SqlValue::Int64(v) => *v,
            SqlValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| decode_error(sql_type, format!("{:?}: {}", s, e)))?,
            other => return Err(unexpected(sql_type, other)),
        };
        Ok(SqlValue::Int64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PgBindError;

    #[test]
    fn test_int_matches_integer_family() {
        assert!(IntType.matches(SqlType::TinyInt));
        assert!(IntType.matches(SqlType::SmallInt));
        assert!(IntType.matches(SqlType::Integer));
        assert!(!IntType.matches(SqlType::BigInt));
        assert!(BigIntType.matches(SqlType::BigInt));
    }

    #[test]
    fn test_int_decode() {
        assert_eq!(
            IntType.decode(SqlType::SmallInt, &SqlValue::Int16(-4)).unwrap(),
            SqlValue::Int32(-4)
        );
        assert_eq!(
            IntType
                .decode(SqlType::Integer, &SqlValue::Text(" 17 ".to_string()))
                .unwrap(),
            SqlValue::Int32(17)
        );
        assert!(matches!(
            IntType.decode(SqlType::Integer, &SqlValue::Int64(i64::MAX)),
            Err(PgBindError::Decode { .. })
        ));
        assert!(matches!(
            IntType.decode(SqlType::Integer, &SqlValue::Bool(true)),
            Err(PgBindError::Decode { .. })
        ));
    }

    #[test]
    fn test_bigint_decode() {
        assert_eq!(
            BigIntType
                .decode(SqlType::BigInt, &SqlValue::Text("9000000000".to_string()))
                .unwrap(),
            SqlValue::Int64(9_000_000_000)
        );
        assert!(BigIntType
            .decode(SqlType::BigInt, &SqlValue::Text("nine".to_string()))
            .is_err());
    }
}
