use std::sync::Arc;

use crate::builders::{NamedQuery, Query, Update};
use crate::data_types::DataTypes;
use crate::traits::DatabaseDriver;

/// Statement executor factory.
/// Created from a PgBindClient and used to run queries and updates.
#[derive(Clone)]
pub struct Querier {
    driver: Arc<dyn DatabaseDriver>,
    registry: Arc<DataTypes>,
    strict_params: bool,
}

impl Querier {
    pub(crate) fn new(
        driver: Arc<dyn DatabaseDriver>,
        registry: Arc<DataTypes>,
        strict_params: bool,
    ) -> Self {
        Self {
            driver,
            registry,
            strict_params,
        }
    }

    /// Prepare a statement that returns rows.
    pub fn query(&self, query: NamedQuery) -> Query {
        Query::new(
            Arc::clone(&self.driver),
            Arc::clone(&self.registry),
            self.apply_policy(query),
        )
    }

    /// Prepare a statement that returns an affected-row count.
    pub fn update(&self, query: NamedQuery) -> Update {
        Update::new(Arc::clone(&self.driver), self.apply_policy(query))
    }

    fn apply_policy(&self, query: NamedQuery) -> NamedQuery {
        if self.strict_params {
            query.strict()
        } else {
            query
        }
    }
}
