use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

/// Binds SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NullParam {
    name: String,
}

impl NullParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parameter for NullParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Null)
    }

    fn as_text(&self) -> String {
        "NULL".to_string()
    }
}
