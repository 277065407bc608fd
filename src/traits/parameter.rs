use crate::error::Result;
use crate::traits::Statement;

/// A named, typed value that knows how to bind itself into a statement.
///
/// Implementations are immutable: `prepare` may be called once per
/// placeholder occurrence and must only touch the given position.
pub trait Parameter: Send + Sync {
    /// Returns the placeholder name this parameter binds to.
    fn name(&self) -> &str;

    /// Writes this parameter's value at `position` (1-based).
    fn prepare(&self, statement: &mut dyn Statement, position: usize) -> Result<()>;

    /// Diagnostic text form, for logging only.
    fn as_text(&self) -> String;
}
