/// Errors raised at the service boundary of the engine.
///
/// Category analyzers never fail; these variants only describe failures that
/// `BlogSeoService` turns into a soft `{error, message}` report.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("analysis aborted: {0}")]
    Aborted(String),
}
