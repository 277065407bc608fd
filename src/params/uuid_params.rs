use uuid::Uuid;

use crate::error::Result;
use crate::traits::{Parameter, Statement};
use crate::types::SqlValue;

use super::parse_error;

/// Only the canonical hyphenated form is accepted; the simple, braced and
/// urn forms are rejected.
fn parse_uuid(name: &str, input: &str) -> Result<Uuid> {
    let trimmed = input.trim();
    if trimmed.len() != 36 {
        return Err(parse_error(
            name,
            input,
            format!("expected 36 characters, got {}", trimmed.len()),
        ));
    }
    Uuid::parse_str(trimmed).map_err(|e| parse_error(name, input, e))
}

/// UUID parameter bound as a native UUID.
#[derive(Debug, Clone, PartialEq)]
pub struct UuidParam {
    name: String,
    value: Uuid,
}

impl UuidParam {
    pub fn new(name: impl Into<String>, value: Uuid) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parses the canonical textual form.
    pub fn parse(name: impl Into<String>, input: &str) -> Result<Self> {
        let name = name.into();
        let value = parse_uuid(&name, input)?;
        Ok(Self { name, value })
    }
}

impl Parameter for UuidParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Uuid(self.value))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}

/// UUID parameter bound as 16 bytes for binary columns: the most
/// significant 8 bytes followed by the least significant 8, big-endian.
#[derive(Debug, Clone, PartialEq)]
pub struct UuidAsBytesParam {
    name: String,
    value: Uuid,
}

impl UuidAsBytesParam {
    pub fn new(name: impl Into<String>, value: Uuid) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parses the canonical textual form.
    pub fn parse(name: impl Into<String>, input: &str) -> Result<Self> {
        let name = name.into();
        let value = parse_uuid(&name, input)?;
        Ok(Self { name, value })
    }
}

impl Parameter for UuidAsBytesParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()> {
        statement.bind(position, SqlValue::Bytes(self.value.as_bytes().to_vec()))
    }

    fn as_text(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PgBindError;
    use crate::types::PreparedStatement;

    const ID: &str = "00112233-4455-6677-8899-aabbccddeeff";

    #[test]
    fn test_as_bytes_layout() {
        let param = UuidAsBytesParam::parse("id", ID).unwrap();
        let mut stmt = PreparedStatement::new("?", 1);
        param.prepare(&mut stmt, 1).unwrap();
        assert_eq!(
            stmt.value(1),
            Some(&SqlValue::Bytes(vec![
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ]))
        );
        assert_eq!(param.as_text(), ID);
    }

    #[test]
    fn test_native_binding() {
        let param = UuidParam::parse("id", ID).unwrap();
        let mut stmt = PreparedStatement::new("?", 1);
        param.prepare(&mut stmt, 1).unwrap();
        assert_eq!(
            stmt.value(1),
            Some(&SqlValue::Uuid(Uuid::parse_str(ID).unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            UuidAsBytesParam::parse("id", "1111-not-a-uuid"),
            Err(PgBindError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_requires_canonical_form() {
        for input in [
            "00112233445566778899aabbccddeeff",
            "{00112233-4455-6677-8899-aabbccddeeff}",
            "urn:uuid:00112233-4455-6677-8899-aabbccddeeff",
            "00112233-4455-6677-8899-aabbccddeefg",
        ] {
            assert!(
                matches!(UuidParam::parse("id", input), Err(PgBindError::Parse { .. })),
                "{} should be rejected",
                input
            );
        }
        assert!(UuidParam::parse("id", " 00112233-4455-6677-8899-AABBCCDDEEFF ").is_ok());
    }
}
