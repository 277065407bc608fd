use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PlaceholderStyle, PreparedStatement, RawQueryResult};

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Connecting to the database
/// - Converting bound SqlValue parameters to native types
/// - Executing statements and converting results to RawQueryResult
///
/// Each method is one round trip; callers never retry.
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Positional marker syntax this driver expects.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered
    }

    /// Execute a statement expected to produce rows.
    async fn query(&self, statement: &PreparedStatement) -> Result<RawQueryResult>;

    /// Execute a statement for its side effects, returning the affected row count.
    async fn update(&self, statement: &PreparedStatement) -> Result<u64>;
}
