use async_trait::async_trait;
use paged_list_api::BoxError;

/// Capability trait for retrieving one bounded window of a collection
///
/// Implementations must not materialize more than `skip + take` items; the
/// underlying collection may be a remote, size-limited stream.
///
/// # Type Parameters
/// * `T` - The element type the source produces
#[async_trait]
pub trait Windowed<T>: Send + Sync {
    /// Skip `skip` items, then return up to `take` items in collection order
    ///
    /// # Arguments
    /// * `skip` - Number of items to pass over before the window
    /// * `take` - Maximum number of items to return
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The window, shorter than `take` at the end of the collection
    /// * `Err` - The read failed; surfaced by the paginator as `SourceUnavailable`
    async fn windowed(&self, skip: u64, take: u64) -> Result<Vec<T>, BoxError>;
}
