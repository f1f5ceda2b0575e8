//! Crate-level error type for a full analysis run

use thiserror::Error;

use crate::request::RequestError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The request failed validation. Nothing was computed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A derived figure came out NaN or infinite.
    #[error("non-finite value computed for {0}")]
    NonFinite(&'static str),
}
