//! Error types for the dispatch pipeline.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a dispatch through the middleware chain.
///
/// The notification middleware itself raises no errors; this type carries
/// failures from other stages (or the terminal consumer) back to the caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A middleware stage failed while processing an action.
    #[error("middleware error: {0}")]
    Middleware(#[source] BoxError),
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Middleware(err)
    }
}
