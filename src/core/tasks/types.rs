use crate::expression::ExpressionFetch;

/// Results sent back from background tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum TaskResult {
    ExpressionFetched(ExpressionFetch),
}
