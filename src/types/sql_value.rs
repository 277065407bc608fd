use rust_decimal::Decimal;
use time::PrimitiveDateTime;
use uuid::Uuid;

/// Represents a SQL value in a driver-agnostic way.
/// Used both for bound parameters and for result cells.
/// Drivers are responsible for converting these to and from their native types.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Decimal(Decimal),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Bool(bool),
    Timestamp(PrimitiveDateTime),
}

impl SqlValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Int16(_) => "int16",
            SqlValue::Int32(_) => "int32",
            SqlValue::Int64(_) => "int64",
            SqlValue::Decimal(_) => "decimal",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Uuid(_) => "uuid",
            SqlValue::Bool(_) => "bool",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i16> for SqlValue {
    fn from(value: i16) -> Self {
        SqlValue::Int16(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int32(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int64(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        SqlValue::Decimal(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<PrimitiveDateTime> for SqlValue {
    fn from(value: PrimitiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// Conversion from a decoded cell into the type the caller asked for.
///
/// On mismatch the original value is handed back so the caller can report
/// what was actually found.
pub trait FromSqlValue: Sized {
    /// Name of the expected value kind, used in error messages.
    const EXPECTED: &'static str;

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue>;
}

impl FromSqlValue for SqlValue {
    const EXPECTED: &'static str = "any";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        Ok(value)
    }
}

impl FromSqlValue for i16 {
    const EXPECTED: &'static str = "int16";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Int16(v) => Ok(v),
            SqlValue::Int32(v) => i16::try_from(v).map_err(|_| SqlValue::Int32(v)),
            other => Err(other),
        }
    }
}

impl FromSqlValue for i32 {
    const EXPECTED: &'static str = "int32";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Int16(v) => Ok(v.into()),
            SqlValue::Int32(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for i64 {
    const EXPECTED: &'static str = "int64";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Int16(v) => Ok(v.into()),
            SqlValue::Int32(v) => Ok(v.into()),
            SqlValue::Int64(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for Decimal {
    const EXPECTED: &'static str = "decimal";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Decimal(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for String {
    const EXPECTED: &'static str = "text";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Text(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for Vec<u8> {
    const EXPECTED: &'static str = "bytes";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Bytes(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for Uuid {
    const EXPECTED: &'static str = "uuid";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Uuid(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Bool(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSqlValue for PrimitiveDateTime {
    const EXPECTED: &'static str = "timestamp";

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Timestamp(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_sql_value(value: SqlValue) -> std::result::Result<Self, SqlValue> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}
