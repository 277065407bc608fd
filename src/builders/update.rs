use std::sync::Arc;

use crate::builders::NamedQuery;
use crate::error::Result;
use crate::traits::DatabaseDriver;

/// Executes a statement for its side effects.
pub struct Update {
    driver: Arc<dyn DatabaseDriver>,
    query: NamedQuery,
}

impl Update {
    pub fn new(driver: Arc<dyn DatabaseDriver>, query: NamedQuery) -> Self {
        Self { driver, query }
    }

    /// Bind the parameters and run the statement, returning the number of
    /// affected rows. Binding failures return before the driver is called.
    pub async fn execute(self) -> Result<u64> {
        let statement = self.query.prepare(self.driver.placeholder_style())?;
        log::debug!("update: {} {:?}", statement, self.query.params());
        let affected = self.driver.update(&statement).await?;
        log::debug!("update affected {} row(s)", affected);
        Ok(affected)
    }
}
