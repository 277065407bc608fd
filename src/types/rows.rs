use std::sync::Arc;

use crate::data_types::DataTypes;
use crate::error::{PgBindError, Result};
use crate::types::{FromSqlValue, SqlType, SqlValue};

/// Name and wire type of one result column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    pub name: String,
    pub sql_type: SqlType,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }
}

/// Driver-agnostic raw result from a database query.
/// Cells hold the driver's raw representation; decoding happens on access.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQueryResult {
    /// Column metadata in order
    pub columns: Vec<ColumnMeta>,
    /// Rows, where each row is a vector of raw cells in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<ColumnMeta>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

fn decode_cell<T: FromSqlValue>(
    registry: &DataTypes,
    column: &ColumnMeta,
    raw: &SqlValue,
) -> Result<T> {
    let decoded = registry.decode(column.sql_type, raw)?;
    T::from_sql_value(decoded).map_err(|found| PgBindError::Decode {
        sql_type: column.sql_type,
        reason: format!(
            "column {} holds {}, expected {}",
            column.name,
            found.kind(),
            T::EXPECTED
        ),
    })
}

fn out_of_bounds(axis: &'static str, index: usize, len: usize) -> PgBindError {
    PgBindError::IndexOutOfBounds { axis, index, len }
}

/// A single row of a result.
/// Cells are decoded through the registry each time they are read.
#[derive(Clone)]
pub struct Row {
    columns: Arc<[ColumnMeta]>,
    values: Vec<SqlValue>,
    registry: Arc<DataTypes>,
}

impl Row {
    /// Gets the decoded value of the named column.
    pub fn get<T: FromSqlValue>(&self, column: &str) -> Result<T> {
        let index = self
            .columns
            .iter()
            .position(|c| c.name == column)
            .ok_or_else(|| PgBindError::ColumnNotFound(column.to_string()))?;
        self.get_at(index)
    }

    /// Gets the decoded value at a 0-based column index.
    pub fn get_at<T: FromSqlValue>(&self, index: usize) -> Result<T> {
        let len = self.values.len();
        match (self.columns.get(index), self.values.get(index)) {
            (Some(meta), Some(raw)) => decode_cell(&self.registry, meta, raw),
            _ => Err(out_of_bounds("column", index, len)),
        }
    }

    /// Gets the undecoded cell at a 0-based column index.
    pub fn raw(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Returns the column metadata of this row.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.columns.iter().map(|c| &c.name).zip(self.values.iter()))
            .finish()
    }
}

/// Result of a query execution, containing zero or more rows.
///
/// Iterating consumes the result: it is a forward cursor and cannot be
/// replayed without executing the query again.
#[derive(Debug)]
pub struct Rows {
    columns: Arc<[ColumnMeta]>,
    rows: Vec<Vec<SqlValue>>,
    registry: Arc<DataTypes>,
}

impl Rows {
    /// Wraps a raw driver result. Column metadata is fixed from here on.
    pub fn new(raw: RawQueryResult, registry: Arc<DataTypes>) -> Self {
        Self {
            columns: raw.columns.into(),
            rows: raw.rows,
            registry,
        }
    }

    /// Gets the decoded value at a 0-based row and column.
    pub fn data<T: FromSqlValue>(&self, row: usize, column: usize) -> Result<T> {
        let cells = self
            .rows
            .get(row)
            .ok_or_else(|| out_of_bounds("row", row, self.rows.len()))?;
        match (self.columns.get(column), cells.get(column)) {
            (Some(meta), Some(raw)) => decode_cell(&self.registry, meta, raw),
            _ => Err(out_of_bounds("column", column, cells.len())),
        }
    }

    /// Extracts a single row from the result.
    /// Returns an error if the result contains zero or more than one row.
    pub fn single_row(self) -> Result<Row> {
        let actual = self.rows.len();
        if actual != 1 {
            return Err(PgBindError::UnexpectedRowCount {
                expected: 1,
                actual,
            });
        }
        self.into_iter()
            .next()
            .ok_or(PgBindError::UnexpectedRowCount {
                expected: 1,
                actual: 0,
            })
    }

    /// Returns the column metadata from this result.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Returns the number of rows in this result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if this result contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = RowsIter;

    fn into_iter(self) -> RowsIter {
        RowsIter {
            columns: self.columns,
            rows: self.rows.into_iter(),
            registry: self.registry,
        }
    }
}

/// Forward-only iterator over the rows of a result.
#[derive(Debug)]
pub struct RowsIter {
    columns: Arc<[ColumnMeta]>,
    rows: std::vec::IntoIter<Vec<SqlValue>>,
    registry: Arc<DataTypes>,
}

impl Iterator for RowsIter {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let values = self.rows.next()?;
        Some(Row {
            columns: Arc::clone(&self.columns),
            values,
            registry: Arc::clone(&self.registry),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for RowsIter {}
