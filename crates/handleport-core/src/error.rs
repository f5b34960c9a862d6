use thiserror::Error;

/// Errors converting wire descriptors into domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandleError {
    /// The wire carried a dtype value this build does not know.
    #[error("unknown dtype enum value {0}")]
    UnknownDtype(i32),
}
