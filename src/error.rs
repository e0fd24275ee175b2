//! Structured error types for timetable-support.
//!
//! Only the record accessors can fail; the color, text and datetime helpers
//! are total functions with defined fallbacks. Every variant names the
//! offending column so the caller can see the contract violation at the
//! call site.

/// All errors that can occur when reading typed values out of a record.
#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    /// The requested column does not exist in the record.
    #[error("Column {0} was not found in data record")]
    ColumnNotFound(String),

    /// The column is null and the caller supplied no default value.
    #[error("Column {0} is null and has no default value")]
    NullColumn(String),

    /// The column holds a value of a type the accessor cannot convert.
    #[error("Column {column} has unsupported value type {found}")]
    TypeMismatch {
        column: String,
        found: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SupportError>;
