use crate::error::Result;
use crate::types::{SqlType, SqlValue};

/// A decoding strategy for one family of column wire types.
///
/// Registered in [`DataTypes`](crate::data_types::DataTypes), where the first
/// entry whose `matches` accepts a column type decodes its cells.
pub trait DataType: Send + Sync {
    /// Name used in logs and registry listings.
    fn name(&self) -> &str;

    /// Returns true if this strategy handles columns of `sql_type`.
    fn matches(&self, sql_type: SqlType) -> bool;

    /// Decodes a non-null raw cell of a column declared as `sql_type`.
    fn decode(&self, sql_type: SqlType, raw: &SqlValue) -> Result<SqlValue>;
}
