use thiserror::Error;

/// Errors returned by widget lifecycle and setup calls.
///
/// Rendering and toggling themselves never fail; per-element problems are
/// logged and skipped.
#[derive(Debug, Error)]
pub enum LiveUiError {
    #[error("{0} is already running")]
    AlreadyRunning(&'static str),
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid uptime: {0}")]
    Uptime(String),
}
