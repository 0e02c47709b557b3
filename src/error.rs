use thiserror::Error;

/// Crate-wide error type.
///
/// The summarization and filtering pipeline itself never fails: malformed
/// instruction payloads are skipped, unknown lookup entities fail the
/// condition that needed them, and unrecognized filter conditions evaluate
/// as never-satisfied. Errors only arise at the JSON boundaries where the
/// external contracts (transaction pages, filters, account books, asset
/// batches) are decoded.
#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Serialization error: {0}")] Serialization(#[from] serde_json::Error),
}

pub type ActivityResult<T> = Result<T, ActivityError>;
