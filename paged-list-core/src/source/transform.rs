use paged_list_api::BoxError;

/// Batch element transformer applied to an extracted window
/// (ex. model to view-model mapping)
///
/// The whole window is mapped in one call; a failure fails the page, there
/// are no per-element partial results. Any matching `Fn` closure works:
///
/// # Example
/// ```
/// use paged_list_core::source::transform::TransformBatch;
/// use paged_list_api::BoxError;
///
/// let to_label = |batch: Vec<u32>| -> Result<Vec<String>, BoxError> {
///     Ok(batch.into_iter().map(|id| format!("item-{id}")).collect())
/// };
/// assert_eq!(to_label.transform(vec![1, 2]).unwrap(), vec!["item-1", "item-2"]);
/// ```
pub trait TransformBatch<S, D>: Send + Sync {
    /// Map one extracted window from the source representation to the
    /// destination representation, preserving order
    fn transform(&self, batch: Vec<S>) -> Result<Vec<D>, BoxError>;
}

impl<S, D, F> TransformBatch<S, D> for F
where
    F: Fn(Vec<S>) -> Result<Vec<D>, BoxError> + Send + Sync,
{
    fn transform(&self, batch: Vec<S>) -> Result<Vec<D>, BoxError> {
        self(batch)
    }
}
