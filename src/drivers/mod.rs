mod tokio_postgres;

pub use self::in_memory_test::{
    InMemoryTestDriver, InMemoryTestResponseBuilder, RecordedQuery, StatementKind,
};
pub use self::tokio_postgres::TokioPostgresDriver;
