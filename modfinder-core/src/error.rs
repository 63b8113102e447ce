use thiserror::Error;

/// Errors raised where untyped column ids, names or criteria text enter the
/// sort core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A column id or name that does not map to a sortable field.
    #[error("Unsupported column for sorting: {0}")]
    UnsupportedColumn(String),

    /// Malformed criteria text, such as an empty item or an unknown direction.
    #[error("Invalid sort criteria: {0}")]
    InvalidCriteria(String),
}

/// Result alias for the sort core.
pub type Result<T> = std::result::Result<T, SortError>;
