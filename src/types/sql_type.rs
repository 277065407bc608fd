use std::fmt;

/// Column type code reported by a driver for each result column.
/// Drivers map their native type identifiers onto these families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Numeric,
    Text,
    Binary,
    Uuid,
    Boolean,
    Timestamp,
    /// A driver type with no mapping, carrying the driver's type id.
    Other(u32),
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::TinyInt => f.write_str("TINYINT"),
            SqlType::SmallInt => f.write_str("SMALLINT"),
            SqlType::Integer => f.write_str("INTEGER"),
            SqlType::BigInt => f.write_str("BIGINT"),
            SqlType::Numeric => f.write_str("NUMERIC"),
            SqlType::Text => f.write_str("TEXT"),
            SqlType::Binary => f.write_str("BINARY"),
            SqlType::Uuid => f.write_str("UUID"),
            SqlType::Boolean => f.write_str("BOOLEAN"),
            SqlType::Timestamp => f.write_str("TIMESTAMP"),
            SqlType::Other(oid) => write!(f, "OTHER({})", oid),
        }
    }
}
