mod named_query;
mod query;
mod update;

pub use self::named_query::{NamedQuery, Template};
pub use self::query::Query;
pub use self::update::Update;
