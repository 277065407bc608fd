use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

/// Boolean parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolParam {
    name: String,
    value: bool,
}

impl BoolParam {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Parameter for BoolParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Bool(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}
