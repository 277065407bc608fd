mod rows;
mod sql_type;
mod sql_value;
mod statement;

pub use rows::{ColumnMeta, RawQueryResult, Row, Rows, RowsIter};
pub use sql_type::SqlType;
pub use sql_value::{FromSqlValue, SqlValue};
pub use statement::{PlaceholderStyle, PreparedStatement};
