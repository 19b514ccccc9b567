use thiserror::Error;

/// Boxed error type used at the data source boundary
///
/// Source implementations report failures in whatever error type their
/// transport produces; the paginator wraps them into [`PaginationError`]
/// without inspecting the cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PaginationError {
    /// A page parameter was below 1. Raised before any source I/O and never
    /// retried; the caller fixes the input.
    #[error("{parameter} cannot be below 1 (got {value})")]
    InvalidArgument {
        parameter: &'static str,
        value: u64,
    },

    /// The count or window read against the data source failed. Surfaced
    /// unchanged; retry policy belongs to the source, not to this library.
    #[error("Data source unavailable: {source}")]
    SourceUnavailable {
        #[source]
        source: BoxError,
    },

    /// The batch transformer failed on the extracted window. The whole page
    /// fails; no partial page is returned.
    #[error("Mapping failed: {source}")]
    MappingFailure {
        #[source]
        source: BoxError,
    },
}

pub type PaginationResult<T> = Result<T, PaginationError>;
