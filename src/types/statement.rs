use std::fmt;

use crate::error::{PgBindError, Result};
use crate::traits::Statement;
use crate::types::SqlValue;

/// Positional marker syntax expected by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` for every position (JDBC/ODBC style).
    Question,
    /// `$1`, `$2`, ... (PostgreSQL style).
    #[default]
    Numbered,
}

impl PlaceholderStyle {
    /// Appends the marker for `position` (1-based) to `sql`.
    pub fn write_marker(self, sql: &mut String, position: usize) {
        match self {
            PlaceholderStyle::Question => sql.push('?'),
            PlaceholderStyle::Numbered => {
                sql.push('$');
                sql.push_str(&position.to_string());
            }
        }
    }
}

/// A statement ready to be handed to a driver: positional SQL plus one
/// slot per marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedStatement {
    sql: String,
    slots: Vec<Option<SqlValue>>,
}

impl PreparedStatement {
    /// Creates a statement with `positions` unbound slots.
    pub fn new(sql: impl Into<String>, positions: usize) -> Self {
        Self {
            sql: sql.into(),
            slots: vec![None; positions],
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Number of positional markers in the statement.
    pub fn positions(&self) -> usize {
        self.slots.len()
    }

    /// Returns the value bound at `position` (1-based), if any.
    pub fn value(&self, position: usize) -> Option<&SqlValue> {
        position
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .and_then(|slot| slot.as_ref())
    }

    /// Returns every bound value in position order.
    /// Fails if any position was left unbound.
    pub fn values(&self) -> Result<Vec<SqlValue>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.clone().ok_or(PgBindError::UnboundPosition(i + 1)))
            .collect()
    }
}

impl Statement for PreparedStatement {
    fn bind(&mut self, position: usize, value: SqlValue) -> Result<()> {
        let len = self.slots.len();
        let slot = position
            .checked_sub(1)
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(PgBindError::IndexOutOfBounds {
                axis: "parameter",
                index: position,
                len,
            })?;
        *slot = Some(value);
        Ok(())
    }
}

impl fmt::Display for PreparedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_marker() {
        let mut sql = String::new();
        PlaceholderStyle::Numbered.write_marker(&mut sql, 12);
        sql.push(',');
        PlaceholderStyle::Question.write_marker(&mut sql, 3);
        assert_eq!(sql, "$12,?");
    }

    #[test]
    fn test_bind_is_one_based() {
        let mut stmt = PreparedStatement::new("SELECT $1, $2", 2);
        stmt.bind(2, SqlValue::Int32(2)).unwrap();
        stmt.bind(1, SqlValue::Int32(1)).unwrap();
        assert_eq!(
            stmt.values().unwrap(),
            vec![SqlValue::Int32(1), SqlValue::Int32(2)]
        );
        assert_eq!(stmt.value(2), Some(&SqlValue::Int32(2)));
        assert_eq!(stmt.value(0), None);
    }

    #[test]
    fn test_bind_out_of_range() {
        let mut stmt = PreparedStatement::new("SELECT $1", 1);
        assert!(matches!(
            stmt.bind(0, SqlValue::Null),
            Err(PgBindError::IndexOutOfBounds { index: 0, len: 1, .. })
        ));
        assert!(matches!(
            stmt.bind(2, SqlValue::Null),
            Err(PgBindError::IndexOutOfBounds { index: 2, len: 1, .. })
        ));
    }

    #[test]
    fn test_unbound_position_is_reported() {
        let mut stmt = PreparedStatement::new("SELECT $1, $2", 2);
        stmt.bind(1, SqlValue::Bool(true)).unwrap();
        assert!(matches!(
            stmt.values(),
            Err(PgBindError::UnboundPosition(2))
        ));
    }
}
