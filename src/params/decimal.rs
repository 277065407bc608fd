use rust_decimal::Decimal;

use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

use super::parse_error;

/// Exact decimal parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalParam {
    name: String,
    value: Decimal,
}

impl DecimalParam {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parses `input` with `.` as the decimal separator, whatever the locale.
    /// Exponent notation is accepted. Malformed input, digit separators and
    /// values that would need rounding are errors, never zero.
    pub fn parse(name: impl Into<String>, input: &str) -> Result<Self> {
        let name = name.into();
        let trimmed = input.trim();
        if trimmed.contains('_') {
            return Err(parse_error(&name, input, "digit separators are not allowed"));
        }
        let parsed = if trimmed.contains(|c: char| c == 'e' || c == 'E') {
            Decimal::from_scientific(trimmed)
        } else {
            Decimal::from_str_exact(trimmed)
        };
        let value = parsed.map_err(|e| parse_error(&name, input, e))?;
        Ok(Self { name, value })
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl Parameter for DecimalParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Decimal(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}
