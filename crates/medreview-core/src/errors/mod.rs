mod review_error;
mod storage_error;

pub use review_error::ReviewError;
pub use storage_error::StorageError;

/// Result alias used by every fallible operation in the workspace.
pub type ReviewResult<T> = Result<T, ReviewError>;
