use crate::error::Result;
use crate::types::SqlValue;

/// Target of parameter binding: anything that accepts a value at a
/// 1-based marker position.
pub trait Statement {
    fn bind(&mut self, position: usize, value: SqlValue) -> Result<()>;
}
