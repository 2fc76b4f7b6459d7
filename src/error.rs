use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key isn't stored in the tree.
    #[error("key not present in tree")]
    NotFound,
}
