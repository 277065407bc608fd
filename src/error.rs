use thiserror::Error;

use crate::types::SqlType;

/// Error type for pgbind operations
#[derive(Debug, Error)]
pub enum PgBindError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("No parameter supplied for placeholder :{0}")]
    MissingParameter(String),

    #[error("Parameter {0} is not referenced by the statement")]
    UnusedParameter(String),

    #[error("Parameter {0} supplied more than once")]
    DuplicateParameter(String),

    #[error("Cannot parse parameter {name} from {input:?}: {reason}")]
    Parse {
        name: String,
        input: String,
        reason: String,
    },

    #[error("No data type registered for {0}")]
    UnsupportedType(SqlType),

    #[error("Cannot decode {sql_type} value: {reason}")]
    Decode { sql_type: SqlType, reason: String },

    #[error("{axis} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Statement position {0} has no bound value")]
    UnboundPosition(usize),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for pgbind operations
pub type Result<T> = std::result::Result<T, PgBindError>;
