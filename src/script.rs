use crate::builders::NamedQuery;
use crate::error::Result;
use crate::querier::Querier;

/// A multi-statement SQL script.
///
/// Statements are separated by `;` and run one by one as updates, with no
/// transaction around them. The split is purely textual, so a `;` inside a
/// string literal also ends a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlScript {
    text: String,
}

impl SqlScript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The trimmed, non-empty statements in script order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.text
            .split(';')
            .map(str::trim)
            .filter(|sql| !sql.is_empty())
    }

    /// Runs every statement, returning the summed affected-row count.
    /// Stops at the first failing statement.
    pub async fn exec(&self, querier: &Querier) -> Result<u64> {
        let mut affected = 0;
        for sql in self.statements() {
            affected += querier.update(NamedQuery::simple(sql)).execute().await?;
        }
        Ok(affected)
    }
}
