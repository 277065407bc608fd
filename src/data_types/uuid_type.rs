use uuid::Uuid;

use crate::error::Result;
use crate::traits::DataType;
use crate::types::{SqlType, SqlValue};

use super::{decode_error, unexpected};

/// UUIDs stored natively or as 16 raw bytes.
///
/// The decoding branch is chosen by what the driver actually returned, not by
/// the column type: a cell that is already a UUID passes through untouched.
/// Byte cells must hold exactly 16 bytes, most significant half first.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidType;

impl DataType for UuidType {
    fn name(&self) -> &str {
        "uuid"
    }

    fn matches(&self, sql_type: SqlType) -> bool {
        matches!(sql_type, SqlType::Uuid | SqlType::Binary)
    }

    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue> {
        match raw {
            SqlValue::Uuid(v) => Ok(SqlValue::Uuid(*v)),
            SqlValue::Bytes(b) => {
                let bytes: [u8; 16] = b.as_slice().try_into().map_err(|_| {
                    decode_error(sql_type, format!("expected 16 bytes, got {}", b.len()))
                })?;
                Ok(SqlValue::Uuid(Uuid::from_bytes(bytes)))
            }
            SqlValue::Text(s) => Uuid::parse_str(s.trim())
                .map(SqlValue::Uuid)
                .map_err(|e| decode_error(sql_type, format!("{:?}: {}", s, e))),
            other => Err(unexpected(sql_type, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PgBindError;

    #[test]
    fn test_bytes_split_into_halves() {
        let mut bytes = vec![0u8; 16];
        bytes[7] = 1;
        bytes[15] = 2;
        let decoded = UuidType
            .decode(SqlType::Binary, &SqlValue::Bytes(bytes))
            .unwrap();
        assert_eq!(
            decoded,
            SqlValue::Uuid(Uuid::parse_str("00000000-0000-0001-0000-000000000002").unwrap())
        );
    }

    #[test]
    fn test_wrong_length_fails() {
        for len in [0usize, 15, 17, 32] {
            let result = UuidType.decode(SqlType::Binary, &SqlValue::Bytes(vec![0; len]));
            match result {
                Err(PgBindError::Decode { sql_type, reason }) => {
                    assert_eq!(sql_type, SqlType::Binary);
                    assert_eq!(reason, format!("expected 16 bytes, got {}", len));
                }
                other => panic!("Expected Decode error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_native_uuid_passes_through() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        // Branches on the cell, so a native value under a Binary column still works.
        assert_eq!(
            UuidType.decode(SqlType::Binary, &SqlValue::Uuid(id)).unwrap(),
            SqlValue::Uuid(id)
        );
        assert_eq!(
            UuidType
                .decode(SqlType::Uuid, &SqlValue::Text(id.to_string()))
                .unwrap(),
            SqlValue::Uuid(id)
        );
    }
}
