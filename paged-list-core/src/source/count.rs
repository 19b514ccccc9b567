use async_trait::async_trait;
use paged_list_api::BoxError;

/// Capability trait for reporting the total size of a collection
///
/// One count query per call; the result is a snapshot, not a lock — the
/// collection may change before a subsequent window read.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Count for PgTableSource<PersonRow> {
///     async fn count(&self) -> Result<u64, BoxError> {
///         // SELECT COUNT(*) ...
///     }
/// }
/// ```
#[async_trait]
pub trait Count: Send + Sync {
    /// Report the total number of items in the underlying collection
    ///
    /// # Returns
    /// * `Ok(u64)` - The item count at the time of the read
    /// * `Err` - The read failed; surfaced by the paginator as `SourceUnavailable`
    async fn count(&self) -> Result<u64, BoxError>;
}
