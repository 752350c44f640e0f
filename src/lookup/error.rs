//! Error types for the lookup tree.

/// Errors that can occur during lookup-tree operations.
///
/// Absence of a match is not an error: resolution returns `Ok(None)` for
/// unknown keys. The only failure is a structural violation at the API
/// boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    /// A resolution operation was handed an empty key.
    #[error("Empty key not allowed")]
    EmptyKey,
}
