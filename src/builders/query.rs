use std::sync::Arc;

use crate::builders::NamedQuery;
use crate::data_types::DataTypes;
use crate::error::Result;
use crate::traits::DatabaseDriver;
use crate::types::Rows;

/// Executes a statement expected to produce rows.
pub struct Query {
    driver: Arc<dyn DatabaseDriver>,
    registry: Arc<DataTypes>,
    query: NamedQuery,
}

impl Query {
    pub fn new(driver: Arc<dyn DatabaseDriver>, registry: Arc<DataTypes>, query: NamedQuery) -> Self {
        Self {
            driver,
            registry,
            query,
        }
    }

    /// Bind the parameters, run the statement and wrap the result.
    /// Binding failures return before the driver is called.
    pub async fn execute(self) -> Result<Rows> {
        let statement = self.query.prepare(self.driver.placeholder_style())?;
        log::debug!("query: {} {:?}", statement, self.query.params());
        let raw = self.driver.query(&statement).await?;
        log::debug!("query returned {} row(s)", raw.rows.len());
        Ok(Rows::new(raw, self.registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PgBindError;
    use crate::params::{IntParam, Params};
    use crate::types::{ColumnMeta, PreparedStatement, RawQueryResult, SqlType, SqlValue};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock driver counting round trips
    struct MockDriver {
        calls: AtomicUsize,
        result: RawQueryResult,
    }

    #[async_trait]
    impl DatabaseDriver for MockDriver {
        async fn query(&self, statement: &PreparedStatement) -> Result<RawQueryResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(statement.sql(), "SELECT id FROM t WHERE id = $1");
            Ok(self.result.clone())
        }

        async fn update(&self, _statement: &PreparedStatement) -> Result<u64> {
            unreachable!("queries never call update")
        }
    }

    fn driver() -> Arc<MockDriver> {
        Arc::new(MockDriver {
            calls: AtomicUsize::new(0),
            result: RawQueryResult::new(
                vec![ColumnMeta::new("id", SqlType::Integer)],
                vec![vec![SqlValue::Int32(5)]],
            ),
        })
    }

    #[tokio::test]
    async fn test_execute_single_round_trip() {
        let driver = driver();
        let rows = Query::new(
            driver.clone(),
            Arc::new(DataTypes::default()),
            NamedQuery::new(
                "SELECT id FROM t WHERE id = :id",
                Params::new().with(IntParam::new("id", 5)).unwrap(),
            ),
        )
        .execute()
        .await
        .unwrap();

        assert_eq!(driver.calls.load(Ordering::SeqCst), 1);
        assert_eq!(rows.data::<i32>(0, 0).unwrap(), 5);
    }

    #[tokio::test]
    async fn test_binding_failure_skips_driver() {
        let driver = driver();
        let err = Query::new(
            driver.clone(),
            Arc::new(DataTypes::default()),
            NamedQuery::new("SELECT id FROM t WHERE id = :id", Params::new()),
        )
        .execute()
        .await
        .unwrap_err();

        assert!(matches!(err, PgBindError::MissingParameter(name) if name == "id"));
        assert_eq!(driver.calls.load(Ordering::SeqCst), 0);
    }
}
