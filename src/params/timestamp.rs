use time::PrimitiveDateTime;

use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

/// Timestamp (without time zone) parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampParam {
    name: String,
    value: PrimitiveDateTime,
}

impl TimestampParam {
    pub fn new(name: impl Into<String>, value: PrimitiveDateTime) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Parameter for TimestampParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Timestamp(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}
