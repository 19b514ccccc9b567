use paged_list_api::{PaginationError, PaginationResult};

use crate::models::metadata::PageMetadata;
use crate::source::windowed::Windowed;

/// Extract the window described by `metadata` from `source`
///
/// Issues at most one `windowed` call: none at all when the counted
/// collection is empty, exactly one otherwise. The window request is bounded
/// to `(skip_count, page_size)`, so the source never materializes items
/// outside the page.
///
/// The count in `metadata` is a snapshot; if the live collection shrank in
/// the meantime the window comes back short, which is returned as-is. A
/// window longer than `page_size` is truncated so the page-size invariant
/// holds even against a misbehaving source.
pub async fn extract_page<S, T>(source: &S, metadata: &PageMetadata) -> PaginationResult<Vec<T>>
where
    S: Windowed<T> + ?Sized,
{
    if metadata.total_item_count == 0 {
        return Ok(Vec::new());
    }

    let mut items = source
        .windowed(metadata.skip_count(), metadata.page_size)
        .await
        .map_err(|source| PaginationError::SourceUnavailable { source })?;

    if items.len() as u64 > metadata.page_size {
        items.truncate(metadata.page_size as usize);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paged_list_api::BoxError;

    struct BrokenWindow;

    #[async_trait]
    impl Windowed<i32> for BrokenWindow {
        async fn windowed(&self, _skip: u64, _take: u64) -> Result<Vec<i32>, BoxError> {
            Err("window query failed".into())
        }
    }

    struct OverflowingWindow;

    #[async_trait]
    impl Windowed<i32> for OverflowingWindow {
        async fn windowed(&self, _skip: u64, take: u64) -> Result<Vec<i32>, BoxError> {
            // one more than asked for
            Ok((0..=take as i32).collect())
        }
    }

    #[tokio::test]
    async fn empty_collection_skips_the_window_query() {
        let metadata = PageMetadata::compute(0, 3, 10).unwrap();
        // BrokenWindow would fail if queried; an empty total must not reach it
        let items: Vec<i32> = extract_page(&BrokenWindow, &metadata).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn window_failure_surfaces_as_source_unavailable() {
        let metadata = PageMetadata::compute(5, 1, 2).unwrap();
        let err = extract_page::<_, i32>(&BrokenWindow, &metadata)
            .await
            .unwrap_err();
        assert!(matches!(err, PaginationError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn oversized_window_is_truncated_to_page_size() {
        let metadata = PageMetadata::compute(100, 1, 4).unwrap();
        let items = extract_page(&OverflowingWindow, &metadata).await.unwrap();
        assert_eq!(items.len(), 4);
    }
}
