//! Parameter kinds and the parameter set handed to a [`NamedQuery`].
//!
//! [`NamedQuery`]: crate::builders::NamedQuery

mod boolean;
mod decimal;
mod int;
mod null;
mod text;
mod timestamp;
mod uuid_params;

use std::fmt;

use crate::error::{PgBindError, Result};
use crate::traits::Parameter;

pub use self::boolean::BoolParam;
pub use self::decimal::DecimalParam;
pub use self::int::{BigIntParam, IntParam};
pub use self::null::NullParam;
pub use self::text::TextParam;
pub use self::timestamp::TimestampParam;
pub use self::uuid_params::{UuidAsBytesParam, UuidParam};

pub(crate) fn parse_error(name: &str, input: &str, reason: impl fmt::Display) -> PgBindError {
    PgBindError::Parse {
        name: name.to_string(),
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Ordered set of parameters with unique names.
#[derive(Default)]
pub struct Params {
    items: Vec<Box<dyn Parameter>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, failing if its name is already taken.
    pub fn push(&mut self, param: impl Parameter + 'static) -> Result<()> {
        if self.get(param.name()).is_some() {
            return Err(PgBindError::DuplicateParameter(param.name().to_string()));
        }
        self.items.push(Box::new(param));
        Ok(())
    }

    /// Chaining form of [`push`](Self::push).
    ///
    /// ```
    /// use pgbind::params::{IntParam, Params, TextParam};
    ///
    /// let params = Params::new()
    ///     .with(IntParam::new("id", 7))?
    ///     .with(TextParam::new("name", "Alice"))?;
    /// assert_eq!(params.names(), vec!["id", "name"]);
    /// # Ok::<(), pgbind::PgBindError>(())
    /// ```
    pub fn with(mut self, param: impl Parameter + 'static) -> Result<Self> {
        self.push(param)?;
        Ok(self)
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&dyn Parameter> {
        self.items
            .iter()
            .find(|p| p.name() == name)
            .map(|p| &**p)
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|p| p.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Parameter> {
        self.items.iter().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|p| (p.name().to_string(), p.as_text())))
            .finish()
    }
}
