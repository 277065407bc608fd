use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

/// Text parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParam {
    name: String,
    value: String,
}

impl TextParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Parameter for TextParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Text(self.value.clone()))
    }

    fn as_text(&self) -> String {
        self.value.clone()
    }
}
