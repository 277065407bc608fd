//! pgbind - typed parameter binding and result decoding for PostgreSQL
//!
//! # Example
//! ```ignore
//! use pgbind::{NamedQuery, PgBindClient};
//! use pgbind::params::{DecimalParam, Params, UuidAsBytesParam};
//!
//! // Connect to database
//! let client = PgBindClient::connect("postgres://localhost/mydb").await?;
//! let querier = client.querier();
//!
//! // Named placeholders are rewritten to positional ones and bound in order
//! let inserted = querier
//!     .update(NamedQuery::new(
//!         "INSERT INTO t(id, amount) VALUES (:id, :amount)",
//!         Params::new()
//!             .with(UuidAsBytesParam::parse("id", "67e55044-10b1-426f-9247-bb680e5fe0c8")?)?
//!             .with(DecimalParam::parse("amount", "19.99")?)?,
//!     ))
//!     .execute()
//!     .await?;
//!
//! // Cells are decoded on access through the type registry
//! let rows = querier
//!     .query(NamedQuery::simple("SELECT id, amount FROM t"))
//!     .execute()
//!     .await?;
//! let id: uuid::Uuid = rows.data(0, 0)?;
//! let amount: rust_decimal::Decimal = rows.data(0, 1)?;
//! ```

pub mod builders;
pub mod config;
pub mod data_types;
pub mod drivers;
pub mod error;
pub mod params;
pub mod querier;
pub mod script;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use builders::{NamedQuery, Query, Update};
pub use client::PgBindClient;
pub use config::ClientConfig;
pub use data_types::DataTypes;
pub use error::{PgBindError, Result};
pub use params::Params;
pub use querier::Querier;
pub use script::SqlScript;
pub use traits::{DataType, DatabaseDriver, Parameter, Statement};
pub use types::{
    ColumnMeta, FromSqlValue, PlaceholderStyle, PreparedStatement, RawQueryResult, Row, Rows,
    SqlType, SqlValue,
};
