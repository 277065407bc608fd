use std::error::Error;

use async_trait::async_trait;
use bytes::BytesMut;
use rust_decimal::Decimal;
use time::PrimitiveDateTime;
use tokio_postgres::types::{to_sql_checked, FromSql, IsNull, ToSql, Type, WrongType};
use tokio_postgres::{Client, NoTls};
use uuid::Uuid;

use crate::error::{PgBindError, Result};
use crate::traits::DatabaseDriver;
use crate::types::{ColumnMeta, PreparedStatement, RawQueryResult, SqlType, SqlValue};

type BoxError = Box<dyn Error + Sync + Send>;

/// PostgreSQL driver implementation using tokio-postgres.
pub struct TokioPostgresDriver {
    client: Client,
}

impl TokioPostgresDriver {
    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| PgBindError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("PostgreSQL connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    async fn prepare(
        &self,
        statement: &PreparedStatement,
    ) -> Result<(tokio_postgres::Statement, Vec<SqlValue>)> {
        let values = statement.values()?;
        let prepared = self
            .client
            .prepare(statement.sql())
            .await
            .map_err(|e| PgBindError::QueryFailed(e.to_string()))?;
        Ok((prepared, values))
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn query(&self, statement: &PreparedStatement) -> Result<RawQueryResult> {
        let (prepared, values) = self.prepare(statement).await?;
        let holders: Vec<ParamHolder<'_>> = values.iter().map(ParamHolder).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = holders
            .iter()
            .map(|h| h as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(&prepared, &param_refs)
            .await
            .map_err(|e| PgBindError::QueryFailed(e.to_string()))?;

        // Metadata comes from the statement so that empty results still carry it
        let columns: Vec<ColumnMeta> = prepared
            .columns()
            .iter()
            .map(|c| ColumnMeta::new(c.name(), sql_type_of(c.type_())))
            .collect();

        let result_rows = rows
            .iter()
            .map(|row| {
                (0..row.len())
                    .map(|i| {
                        row.try_get::<_, CellHolder>(i)
                            .map(|cell| cell.0)
                            .map_err(|e| PgBindError::QueryFailed(e.to_string()))
                    })
                    .collect::<Result<Vec<SqlValue>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RawQueryResult::new(columns, result_rows))
    }

    async fn update(&self, statement: &PreparedStatement) -> Result<u64> {
        let (prepared, values) = self.prepare(statement).await?;
        let holders: Vec<ParamHolder<'_>> = values.iter().map(ParamHolder).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = holders
            .iter()
            .map(|h| h as &(dyn ToSql + Sync))
            .collect();

        self.client
            .execute(&prepared, &param_refs)
            .await
            .map_err(|e| PgBindError::QueryFailed(e.to_string()))
    }
}

/// Maps a PostgreSQL column type onto its type family.
fn sql_type_of(ty: &Type) -> SqlType {
    match *ty {
        Type::INT2 => SqlType::SmallInt,
        Type::INT4 => SqlType::Integer,
        Type::INT8 => SqlType::BigInt,
        Type::NUMERIC => SqlType::Numeric,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::CHAR => SqlType::Text,
        Type::BYTEA => SqlType::Binary,
        Type::UUID => SqlType::Uuid,
        Type::BOOL => SqlType::Boolean,
        Type::TIMESTAMP => SqlType::Timestamp,
        _ => SqlType::Other(ty.oid()),
    }
}

/// Reads any column into its raw SqlValue form.
/// Unmapped types keep their binary payload; the registry rejects them on access.
#[derive(Debug)]
struct CellHolder(SqlValue);

impl<'a> FromSql<'a> for CellHolder {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, BoxError> {
        let value = match *ty {
            // Single-byte "char"
            Type::CHAR => SqlValue::Text(char::from(i8::from_sql(ty, raw)? as u8).to_string()),
            Type::INT2 => SqlValue::Int16(i16::from_sql(ty, raw)?),
            Type::INT4 => SqlValue::Int32(i32::from_sql(ty, raw)?),
            Type::INT8 => SqlValue::Int64(i64::from_sql(ty, raw)?),
            Type::NUMERIC => SqlValue::Decimal(Decimal::from_sql(ty, raw)?),
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
                SqlValue::Text(String::from_sql(ty, raw)?)
            }
            Type::BYTEA => SqlValue::Bytes(Vec::<u8>::from_sql(ty, raw)?),
            Type::UUID => SqlValue::Uuid(Uuid::from_sql(ty, raw)?),
            Type::BOOL => SqlValue::Bool(bool::from_sql(ty, raw)?),
            Type::TIMESTAMP => SqlValue::Timestamp(PrimitiveDateTime::from_sql(ty, raw)?),
            _ => SqlValue::Bytes(raw.to_vec()),
        };
        Ok(CellHolder(value))
    }

    fn from_sql_null(_ty: &Type) -> std::result::Result<Self, BoxError> {
        Ok(CellHolder(SqlValue::Null))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// Writes a bound SqlValue in the representation the server asked for.
/// Integers are widened or narrowed to the parameter's declared width; any
/// other mismatch between value and parameter type is a `WrongType` error.
#[derive(Debug)]
struct ParamHolder<'a>(&'a SqlValue);

impl ToSql for ParamHolder<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match self.0 {
            SqlValue::Null => Ok(IsNull::Yes),
            SqlValue::Int16(v) => write_int(i64::from(*v), ty, out),
            SqlValue::Int32(v) => write_int(i64::from(*v), ty, out),
            SqlValue::Int64(v) => write_int(*v, ty, out),
            SqlValue::Decimal(v) => write_checked(v, ty, out),
            SqlValue::Text(v) => write_checked(v, ty, out),
            SqlValue::Bytes(v) => write_checked(v, ty, out),
            SqlValue::Uuid(v) => write_checked(v, ty, out),
            SqlValue::Bool(v) => write_checked(v, ty, out),
            SqlValue::Timestamp(v) => write_checked(v, ty, out),
        }
    }

    // Checked per value in `to_sql`
    fn accepts(_ty: &Type) -> bool
    where
        Self: Sized,
    {
        true
    }

    to_sql_checked!();
}

fn write_checked<T: ToSql>(
    value: &T,
    ty: &Type,
    out: &mut BytesMut,
) -> std::result::Result<IsNull, BoxError> {
    if !T::accepts(ty) {
        return Err(Box::new(WrongType::new::<T>(ty.clone())));
    }
    value.to_sql(ty, out)
}

fn write_int(value: i64, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        Type::INT8 => value.to_sql(ty, out),
        Type::NUMERIC => Decimal::from(value).to_sql(ty, out),
        _ => Err(Box::new(WrongType::new::<i64>(ty.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type_mapping() {
        assert_eq!(sql_type_of(&Type::INT2), SqlType::SmallInt);
        assert_eq!(sql_type_of(&Type::INT4), SqlType::Integer);
        assert_eq!(sql_type_of(&Type::BYTEA), SqlType::Binary);
        assert_eq!(sql_type_of(&Type::UUID), SqlType::Uuid);
        assert_eq!(sql_type_of(&Type::VARCHAR), SqlType::Text);
        assert_eq!(sql_type_of(&Type::CHAR), SqlType::Text);
        assert_eq!(sql_type_of(&Type::JSONB), SqlType::Other(Type::JSONB.oid()));
    }

    #[test]
    fn test_cell_holder_reads_raw_payloads() {
        let cell = CellHolder::from_sql(&Type::INT4, &7i32.to_be_bytes()).unwrap();
        assert_eq!(cell.0, SqlValue::Int32(7));

        let cell = CellHolder::from_sql(&Type::BYTEA, &[1, 2, 3]).unwrap();
        assert_eq!(cell.0, SqlValue::Bytes(vec![1, 2, 3]));

        let cell = CellHolder::from_sql(&Type::CHAR, b"r").unwrap();
        assert_eq!(cell.0, SqlValue::Text("r".to_string()));

        let cell = CellHolder::from_sql_null(&Type::UUID).unwrap();
        assert_eq!(cell.0, SqlValue::Null);
    }

    #[test]
    fn test_param_holder_matches_declared_width() {
        let value = SqlValue::Int32(5);
        let mut out = BytesMut::new();
        ParamHolder(&value).to_sql(&Type::INT8, &mut out).unwrap();
        assert_eq!(&out[..], &5i64.to_be_bytes());

        let mut out = BytesMut::new();
        ParamHolder(&value).to_sql(&Type::INT2, &mut out).unwrap();
        assert_eq!(&out[..], &5i16.to_be_bytes());

        let big = SqlValue::Int64(i64::from(i16::MAX) + 1);
        let mut out = BytesMut::new();
        assert!(ParamHolder(&big).to_sql(&Type::INT2, &mut out).is_err());
    }

    #[test]
    fn test_param_holder_null() {
        let mut out = BytesMut::new();
        let is_null = ParamHolder(&SqlValue::Null)
            .to_sql(&Type::TEXT, &mut out)
            .unwrap();
        assert!(matches!(is_null, IsNull::Yes));
    }

    #[test]
    fn test_param_holder_rejects_mismatched_types() {
        let text = SqlValue::Text("1234".to_string());
        let mut out = BytesMut::new();
        assert!(ParamHolder(&text).to_sql(&Type::INT4, &mut out).is_err());
        assert!(out.is_empty());

        let wide = SqlValue::Int64(0x4141_4141_4141_4141);
        let mut out = BytesMut::new();
        assert!(ParamHolder(&wide).to_sql(&Type::TEXT, &mut out).is_err());
        assert!(out.is_empty());

        let bytes = SqlValue::Bytes(vec![0; 16]);
        let mut out = BytesMut::new();
        assert!(ParamHolder(&bytes).to_sql(&Type::UUID, &mut out).is_err());
    }

    #[test]
    fn test_param_holder_accepts_matching_types() {
        let text = SqlValue::Text("hi".to_string());
        let mut out = BytesMut::new();
        ParamHolder(&text).to_sql(&Type::VARCHAR, &mut out).unwrap();
        assert_eq!(&out[..], b"hi");

        let amount = SqlValue::Int32(7);
        let mut out = BytesMut::new();
        ParamHolder(&amount).to_sql(&Type::NUMERIC, &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
