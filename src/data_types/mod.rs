//! Column type registry.
//!
//! [`DataTypes`] is an ordered list of decoding strategies. Lookup walks the
//! list front to back and the first strategy whose matcher accepts the
//! column's [`SqlType`] wins, so registration order is the precedence order.

mod binary;
mod boolean;
mod decimal;
mod int;
mod text;
mod timestamp;
mod uuid_type;

use std::fmt;

use crate::error::{PgBindError, Result};
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

pub use self::boolean::BoolType;
pub use self::binary::BytesType;
pub use self::decimal::DecimalType;
pub use self::int::{BigIntType, IntType};
pub use self::text::TextType;
pub use self::timestamp::TimestampType;
pub use self::uuid_type::UuidType;

pub(crate) fn decode_error(sql_type: SqlType, reason: impl Into<String>) -> PgBindError {
    PgBindError::Decode {
        sql_type,
        reason: reason.into(),
    }
}

pub(crate) fn unexpected(sql_type: SqlType, raw: &SqlValue) -> PgBindError {
    decode_error(sql_type, format!("unexpected raw {} cell", raw.kind()))
}

/// Precedence-ordered list of decoding strategies.
pub struct DataTypes {
    entries: Vec<Box<dyn DataType>>,
}

impl DataTypes {
    /// A registry with no strategies; every lookup fails until one is registered.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a strategy after all existing ones.
    pub fn register(mut self, data_type: impl DataType + 'static) -> Self {
        self.entries.push(Box::new(data_type));
        self
    }

    /// Insert a strategy ahead of all existing ones.
    pub fn register_first(mut self, data_type: impl DataType + 'static) -> Self {
        self.entries.insert(0, Box::new(data_type));
        self
    }

    /// Append a strategy built from a matcher and a decoder closure.
    /// The decoder reports failures as a reason string.
    pub fn register_fn<M, D>(self, name: &'static str, matcher: M, decoder: D) -> Self
    where
        M: Fn(SqlType) -> bool + Send + Sync + 'static,
        D: Fn(&SqlValue) -> std::result::Result<SqlValue, String> + Send + Sync + 'static,
    {
        self.register(FnDataType {
            name,
            matcher,
            decoder,
        })
    }

    /// Returns the first strategy that handles `sql_type`.
    pub fn resolve(&self, sql_type: SqlType) -> Result<&dyn DataType> {
        self.entries
            .iter()
            .find(|entry| entry.matches(sql_type))
            .map(|entry| &**entry)
            .ok_or(PgBindError::UnsupportedType(sql_type))
    }

    /// Resolves the strategy for `sql_type` and decodes `raw` with it.
    /// NULL decodes to NULL under any matching strategy.
    pub fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        let data_type = self.resolve(sql_type)?;
        if raw.is_null() {
            return Ok(SqlValue::Null);
        }
        log::trace!("decoding {} cell with {}", sql_type, data_type.name());
        data_type.decode(sql_type, raw)
    }

    /// Names of the registered strategies in precedence order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DataTypes {
    /// The built-in strategies. `BytesType` is left out so that binary
    /// columns decode as UUIDs; register it first to read raw blobs instead.
    fn default() -> Self {
        Self::empty()
            .register(IntType)
            .register(BigIntType)
            .register(DecimalType)
            .register(TextType)
            .register(BoolType)
            .register(TimestampType)
            .register(UuidType)
    }
}

impl fmt::Debug for DataTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

struct FnDataType<M, D> {
    name: &'static str,
    matcher: M,
    decoder: D,
}

impl<M, D> DataType for FnDataType<M, D>
where
    M: Fn(SqlType) -> bool + Send + Sync,
    D: Fn(&SqlValue) -> std::result::Result<SqlValue, String> + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        (self.matcher)(sql_type)
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        (self.decoder)(raw).map_err(|reason| decode_error(sql_type, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            DataTypes::default().names(),
            vec!["int", "bigint", "decimal", "text", "bool", "timestamp", "uuid"]
        );
    }

    #[test]
    fn test_unsupported_type() {
        let registry = DataTypes::default();
        assert!(matches!(
            registry.decode(SqlType::Other(600), &SqlValue::Int32(1)),
            Err(PgBindError::UnsupportedType(SqlType::Other(600)))
        ));
        assert!(matches!(
            DataTypes::empty().resolve(SqlType::Integer),
            Err(PgBindError::UnsupportedType(SqlType::Integer))
        ));
    }

    #[test]
    fn test_null_decodes_to_null() {
        let registry = DataTypes::default();
        assert_eq!(
            registry.decode(SqlType::Uuid, &SqlValue::Null).unwrap(),
            SqlValue::Null
        );
    }

    #[test]
    fn test_null_of_unsupported_type_still_fails() {
        assert!(DataTypes::default()
            .decode(SqlType::Other(1), &SqlValue::Null)
            .is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let raw = SqlValue::Bytes(vec![7; 16]);

        let uuid_first = DataTypes::default().register(BytesType);
        assert!(matches!(
            uuid_first.decode(SqlType::Binary, &raw).unwrap(),
            SqlValue::Uuid(_)
        ));

        let bytes_first = DataTypes::default().register_first(BytesType);
        assert_eq!(bytes_first.resolve(SqlType::Binary).unwrap().name(), "bytes");
        assert_eq!(bytes_first.decode(SqlType::Binary, &raw).unwrap(), raw);
    }

    #[test]
    fn test_register_fn() {
        let registry = DataTypes::empty().register_fn(
            "oid",
            |t| matches!(t, SqlType::Other(26)),
            |raw| match raw {
                SqlValue::Int64(v) => Ok(SqlValue::Int64(*v)),
                other => Err(format!("not an oid: {}", other.kind())),
            },
        );
        assert_eq!(
            registry
                .decode(SqlType::Other(26), &SqlValue::Int64(42))
                .unwrap(),
            SqlValue::Int64(42)
        );
        match registry.decode(SqlType::Other(26), &SqlValue::Bool(true)) {
            Err(PgBindError::Decode { sql_type, reason }) => {
                assert_eq!(sql_type, SqlType::Other(26));
                assert_eq!(reason, "not an oid: bool");
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
