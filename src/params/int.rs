use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

/// 32-bit integer parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct IntParam {
    name: String,
    value: i32,
}

impl IntParam {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Parameter for IntParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Int32(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}

/// 64-bit integer parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BigIntParam {
    name: String,
    value: i64,
}

impl BigIntParam {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Parameter for BigIntParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Int64(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}
