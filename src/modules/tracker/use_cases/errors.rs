use thiserror::Error;

use crate::modules::tracker::use_cases::rollup::handler::RollupError;
use crate::shared::infrastructure::store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Write-boundary rejection, before anything reaches the store or the
    /// aggregator.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Rollup(#[from] RollupError),
}
